use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use gridsnake::config::THEME_CLASSIC;
use gridsnake::game::Game;
use gridsnake::input::{GameInput, map_key_event};
use gridsnake::renderer;
use gridsnake::scheduler::IntervalTimer;
use gridsnake::score::{FileStore, load_high_score, save_high_score};
use gridsnake::terminal_runtime::{TerminalSession, install_panic_hook};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Parser)]
struct Cli {
    /// Seed the food sequence for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Skip reading and writing the persisted high score.
    #[arg(long = "no-persist")]
    no_persist: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let mut store = (!cli.no_persist).then(FileStore::at_default_path);
    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(IntervalTimer::new(), seed),
        None => Game::new(IntervalTimer::new()),
    };

    if let Some(store) = &store {
        game.set_high_score(load_high_score(store));
    }

    // Warnings are printed once the terminal session has been torn down.
    if let Some(warning) = run(&mut game, &mut store)? {
        eprintln!("{warning}");
    }

    Ok(())
}

fn run(
    game: &mut Game<IntervalTimer>,
    store: &mut Option<FileStore>,
) -> io::Result<Option<String>> {
    let mut session = TerminalSession::enter()?;
    let mut persisted_high_score = game.high_score();
    let mut store_warning = None;

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, game, &THEME_CLASSIC))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                match map_key_event(key) {
                    Some(GameInput::Quit) => break,
                    Some(input) => game.apply_input(input),
                    None => {}
                }
            }
        }

        if game.scheduler_mut().poll(Instant::now()) {
            game.tick();
        }

        if game.high_score() > persisted_high_score {
            persisted_high_score = game.high_score();
            if let Some(store) = store.as_mut() {
                if let Err(error) = save_high_score(store, persisted_high_score) {
                    store_warning = Some(format!("Failed to save high score: {error}"));
                }
            }
        }
    }

    Ok(store_warning)
}
