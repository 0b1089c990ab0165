use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{self, Collision};
use crate::config::{FOOD_POINTS, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, SPEED_STEP_MS};
use crate::food;
use crate::grid::Cell;
use crate::input::{Direction, GameInput, InputQueue};
use crate::scheduler::TickScheduler;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Cells a rendering collaborator needs for one frame.
///
/// `snake` is ordered head to tail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardSnapshot {
    pub snake: Vec<Cell>,
    pub food: Cell,
}

/// Complete mutable game state for one session.
///
/// The state machine owns its tick scheduler: transitions arm and cancel
/// it, so no ticks arrive while the game is idle, paused, or over.
#[derive(Debug, Clone)]
pub struct Game<S: TickScheduler> {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    status: GameStatus,
    direction: Direction,
    pending: InputQueue,
    tick_interval_ms: u64,
    high_score: u32,
    high_score_at_start: u32,
    death_cause: Option<Collision>,
    tick_count: u64,
    rng: StdRng,
    scheduler: S,
}

impl<S: TickScheduler> Game<S> {
    /// Creates a fresh idle game with an OS-seeded food sequence.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self::from_rng(scheduler, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(scheduler: S, seed: u64) -> Self {
        Self::from_rng(scheduler, StdRng::seed_from_u64(seed))
    }

    fn from_rng(scheduler: S, mut rng: StdRng) -> Self {
        let snake = Snake::spawn();
        let food = food::spawn(&mut rng, &snake);

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Idle,
            direction: Direction::Right,
            pending: InputQueue::new(),
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            high_score: 0,
            high_score_at_start: 0,
            death_cause: None,
            tick_count: 0,
            rng,
            scheduler,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Direction the snake moved in last, or faces initially.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current delay between movement ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seeds the high score from persistence; lower values are ignored.
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = self.high_score.max(high_score);
        self.high_score_at_start = self.high_score_at_start.max(high_score);
    }

    /// True once this run has beaten the high score it started with.
    #[must_use]
    pub fn is_new_high_score(&self) -> bool {
        self.score > self.high_score_at_start
    }

    /// What ended the run, once the status is `GameOver`.
    #[must_use]
    pub fn death_cause(&self) -> Option<Collision> {
        self.death_cause
    }

    /// Number of movement ticks completed this run.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Copies the cells a renderer draws for the current frame.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            snake: self.snake.cells().copied().collect(),
            food: self.food,
        }
    }

    /// Starts the run from the idle state.
    pub fn start(&mut self) {
        if self.status != GameStatus::Idle {
            return;
        }

        self.high_score_at_start = self.high_score;
        self.status = GameStatus::Running;
        self.scheduler.arm(self.tick_interval());
    }

    /// Suspends a running game.
    pub fn pause(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.status = GameStatus::Paused;
        self.scheduler.cancel();
    }

    /// Continues a paused game at the speed it was paused at.
    pub fn resume(&mut self) {
        if self.status != GameStatus::Paused {
            return;
        }

        self.status = GameStatus::Running;
        self.scheduler.arm(self.tick_interval());
    }

    /// Rebuilds the initial state and starts running immediately.
    ///
    /// The high score and the food sequence survive the restart.
    pub fn restart(&mut self) {
        self.scheduler.cancel();

        self.snake = Snake::spawn();
        self.direction = Direction::Right;
        self.pending.clear();
        self.food = food::spawn(&mut self.rng, &self.snake);
        self.score = 0;
        self.tick_interval_ms = INITIAL_TICK_INTERVAL_MS;
        self.high_score_at_start = self.high_score;
        self.death_cause = None;
        self.tick_count = 0;

        self.status = GameStatus::Running;
        self.scheduler.arm(self.tick_interval());
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.steer(direction),
            GameInput::Pause => match self.status {
                GameStatus::Idle => self.start(),
                GameStatus::Running => self.pause(),
                GameStatus::Paused => self.resume(),
                GameStatus::GameOver => self.restart(),
            },
            GameInput::Quit => {}
        }
    }

    fn steer(&mut self, direction: Direction) {
        match self.status {
            GameStatus::Idle => {
                self.start();
                self.pending.propose(direction, self.direction);
            }
            GameStatus::Running | GameStatus::Paused => {
                self.pending.propose(direction, self.direction);
            }
            GameStatus::GameOver => {}
        }
    }

    /// Advances the simulation by one movement tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.direction = self.pending.consume(self.direction);
        let next_head = self.snake.head().step(self.direction);

        if let Some(cause) = collision::check(next_head, &self.snake) {
            self.death_cause = Some(cause);
            self.status = GameStatus::GameOver;
            self.scheduler.cancel();
            return;
        }

        self.tick_count += 1;
        let ate = next_head == self.food;
        self.snake.advance(next_head, ate);

        if ate {
            self.score += FOOD_POINTS;
            self.high_score = self.high_score.max(self.score);
            self.reduce_tick_interval();
            self.food = food::spawn(&mut self.rng, &self.snake);
        }
    }

    fn reduce_tick_interval(&mut self) {
        let reduced = self
            .tick_interval_ms
            .saturating_sub(SPEED_STEP_MS)
            .max(MIN_TICK_INTERVAL_MS);

        if reduced != self.tick_interval_ms {
            self.tick_interval_ms = reduced;
            self.scheduler.arm(self.tick_interval());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::collision::Collision;
    use crate::grid::Cell;
    use crate::input::{Direction, GameInput};
    use crate::scheduler::ManualScheduler;
    use crate::snake::Snake;

    use super::{Game, GameStatus};

    fn seeded_game() -> Game<ManualScheduler> {
        Game::with_seed(ManualScheduler::new(), 7)
    }

    #[test]
    fn new_game_is_idle_and_centered() {
        let game = seeded_game();

        assert_eq!(game.status(), GameStatus::Idle);
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score(), 0);
        assert_eq!(game.tick_count(), 0);
        assert_eq!(game.death_cause(), None);
        assert_eq!(game.tick_interval(), Duration::from_millis(150));
        assert_eq!(game.scheduler().armed_interval(), None);

        let snapshot = game.snapshot();
        assert_eq!(
            snapshot.snake,
            vec![Cell::new(12, 12), Cell::new(11, 12), Cell::new(10, 12)]
        );
        assert!(snapshot.food.in_bounds());
        assert!(!game.snake.occupies(snapshot.food));
    }

    #[test]
    fn ticks_are_ignored_until_the_run_starts() {
        let mut game = seeded_game();
        let before = game.snapshot();

        game.tick();
        game.tick();

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.tick_count(), 0);
        assert_eq!(game.status(), GameStatus::Idle);
    }

    #[test]
    fn a_direction_key_starts_an_idle_game() {
        let mut game = seeded_game();
        game.food = Cell::new(0, 0);

        game.apply_input(GameInput::Direction(Direction::Up));

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(
            game.scheduler().armed_interval(),
            Some(Duration::from_millis(150))
        );

        game.tick();
        assert_eq!(game.snake.head(), Cell::new(12, 11));
    }

    #[test]
    fn eating_food_grows_scores_and_speeds_up() {
        let mut game = seeded_game();
        game.start();
        game.food = Cell::new(13, 12);

        game.tick();

        assert_eq!(game.score, 10);
        assert_eq!(game.high_score(), 10);
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.snake.head(), Cell::new(13, 12));
        assert_eq!(game.snake.tail(), Cell::new(10, 12));
        assert_eq!(game.tick_interval(), Duration::from_millis(146));
        assert_eq!(
            game.scheduler().armed_interval(),
            Some(Duration::from_millis(146))
        );
        assert!(!game.snake.occupies(game.food));
    }

    #[test]
    fn tick_interval_clamps_at_the_floor_without_rearming() {
        let mut game = seeded_game();
        game.start();
        game.tick_interval_ms = 62;

        game.food = Cell::new(13, 12);
        game.tick();
        assert_eq!(game.tick_interval(), Duration::from_millis(60));

        let arms_at_floor = game.scheduler().arm_calls();
        game.food = Cell::new(14, 12);
        game.tick();

        assert_eq!(game.tick_interval(), Duration::from_millis(60));
        assert_eq!(game.scheduler().arm_calls(), arms_at_floor);
        assert_eq!(
            game.scheduler().armed_interval(),
            Some(Duration::from_millis(60))
        );
    }

    #[test]
    fn wall_collision_ends_the_run_with_the_body_unchanged() {
        let mut game = seeded_game();
        game.start();
        game.snake = Snake::from_cells(vec![
            Cell::new(24, 12),
            Cell::new(23, 12),
            Cell::new(22, 12),
        ]);
        let before = game.snapshot();

        game.tick();

        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.death_cause(), Some(Collision::Wall));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.tick_count(), 0);
        assert_eq!(game.scheduler().armed_interval(), None);
    }

    #[test]
    fn stepping_onto_the_tail_cell_is_fatal() {
        let mut game = seeded_game();
        game.start();
        game.snake = Snake::from_cells(vec![
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(6, 6),
            Cell::new(6, 5),
        ]);

        game.tick();

        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.death_cause(), Some(Collision::SelfCollision));
        assert_eq!(game.snake.len(), 4);
    }

    #[test]
    fn reversal_proposals_are_discarded() {
        let mut game = seeded_game();
        game.start();
        game.food = Cell::new(0, 0);

        game.apply_input(GameInput::Direction(Direction::Left));
        game.tick();

        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.snake.head(), Cell::new(13, 12));
    }

    #[test]
    fn pause_freezes_the_board_and_resume_rearms() {
        let mut game = seeded_game();
        game.start();
        game.pause();

        assert_eq!(game.status(), GameStatus::Paused);
        assert_eq!(game.scheduler().armed_interval(), None);

        let frozen = game.snapshot();
        game.tick();
        game.tick();
        assert_eq!(game.snapshot(), frozen);

        game.resume();
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(
            game.scheduler().armed_interval(),
            Some(Duration::from_millis(150))
        );
    }

    #[test]
    fn restart_rebuilds_the_initial_state_but_keeps_the_high_score() {
        let mut game = seeded_game();
        game.start();
        game.food = Cell::new(13, 12);
        game.tick();
        assert_eq!(game.high_score(), 10);

        game.restart();

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score(), 10);
        assert!(!game.is_new_high_score());
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.tick_count(), 0);
        assert_eq!(game.death_cause(), None);
        assert_eq!(game.tick_interval(), Duration::from_millis(150));
        assert_eq!(
            game.scheduler().armed_interval(),
            Some(Duration::from_millis(150))
        );
        assert_eq!(
            game.snapshot().snake,
            vec![Cell::new(12, 12), Cell::new(11, 12), Cell::new(10, 12)]
        );
    }

    #[test]
    fn seeded_high_score_only_ever_rises() {
        let mut game = seeded_game();

        game.set_high_score(50);
        game.set_high_score(20);
        assert_eq!(game.high_score(), 50);

        game.start();
        game.food = Cell::new(13, 12);
        game.tick();

        assert_eq!(game.score, 10);
        assert_eq!(game.high_score(), 50);
        assert!(!game.is_new_high_score());
    }

    #[test]
    fn beating_the_starting_high_score_is_flagged() {
        let mut game = seeded_game();
        game.set_high_score(10);
        game.start();
        assert!(!game.is_new_high_score());

        game.food = Cell::new(13, 12);
        game.tick();
        assert!(!game.is_new_high_score());

        game.food = Cell::new(14, 12);
        game.tick();

        assert!(game.is_new_high_score());
        assert_eq!(game.high_score(), 20);
    }

    #[test]
    fn space_walks_start_pause_resume_and_restart() {
        let mut game = seeded_game();

        game.apply_input(GameInput::Pause);
        assert_eq!(game.status(), GameStatus::Running);

        game.apply_input(GameInput::Pause);
        assert_eq!(game.status(), GameStatus::Paused);

        game.apply_input(GameInput::Pause);
        assert_eq!(game.status(), GameStatus::Running);

        game.snake = Snake::from_cells(vec![Cell::new(24, 0), Cell::new(23, 0)]);
        game.tick();
        assert_eq!(game.status(), GameStatus::GameOver);

        game.apply_input(GameInput::Pause);
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn direction_keys_are_ignored_after_the_run_ends() {
        let mut game = seeded_game();
        game.start();
        game.snake = Snake::from_cells(vec![Cell::new(24, 0), Cell::new(23, 0)]);
        game.tick();
        assert_eq!(game.status(), GameStatus::GameOver);

        game.apply_input(GameInput::Direction(Direction::Up));
        game.tick();

        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.snake.head(), Cell::new(24, 0));
    }
}
