use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) unit step for this direction. The y axis grows
    /// downward, matching terminal rows.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input intents produced by any input source.
///
/// Keyboard, touch or on-screen controls all reduce to these; the engine
/// consumes `Direction` and `Pause`, the runtime loop consumes `Quit`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
}

/// Buffer holding at most one pending direction change.
///
/// Writes may arrive at any time between ticks; the tick handler consumes
/// the buffer exactly once before computing the move, so at most one
/// direction change takes effect per tick no matter how many proposals
/// arrived.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputQueue {
    pending: Option<Direction>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Stores `direction` as the pending change, overwriting any earlier
    /// proposal. A direction exactly opposite to `current` is silently
    /// discarded (no instant reversals).
    pub fn propose(&mut self, direction: Direction, current: Direction) {
        if direction == current.opposite() {
            return;
        }

        self.pending = Some(direction);
    }

    /// Takes the pending direction, or returns `current` unchanged.
    pub fn consume(&mut self, current: Direction) -> Direction {
        self.pending.take().unwrap_or(current)
    }

    /// Drops any pending proposal.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Returns the pending direction without consuming it.
    #[must_use]
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}

/// Maps one terminal key event to a game intent.
///
/// Arrow keys and w/a/s/d (either case) steer, Space pauses, starts or
/// restarts depending on game state, and q/Esc/Ctrl-C quit. Any other key
/// and any non-press event maps to `None` with no observable effect.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameInput::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char(' ') => Some(GameInput::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
