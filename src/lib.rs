//! Deterministic grid snake.
//!
//! The engine is a fixed 25x25 board advanced by explicit ticks: [`game`]
//! owns the state machine, [`snake`], [`food`], [`collision`], [`grid`],
//! and [`input`] hold the gameplay rules, [`scheduler`] paces the ticks,
//! and [`score`] persists the high score. Everything above is
//! host-agnostic and reproducible under a seed; [`renderer`], [`ui`], and
//! [`terminal_runtime`] wire it to a terminal.

pub mod collision;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
