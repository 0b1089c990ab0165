use ratatui::style::Color;

/// Edge length of the fixed square grid, in cells.
pub const GRID_SIZE: i32 = 25;

/// Reference pixel edge length of one cell.
///
/// Graphical front-ends draw each cell as a `CELL_SIZE` × `CELL_SIZE`
/// square; the bundled terminal renderer draws character blocks instead
/// (see `CELL_COLUMNS`).
pub const CELL_SIZE: u32 = 20;

/// Board edge length in pixels when rendered at `CELL_SIZE`.
pub const BOARD_PIXELS: u32 = GRID_SIZE as u32 * CELL_SIZE;

/// Terminal columns per cell. Two columns per row make cells roughly
/// square in a character grid.
pub const CELL_COLUMNS: u16 = 2;

/// Tick interval at the start of a run, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 150;

/// Fastest allowed tick interval, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Interval reduction per food eaten, in milliseconds.
pub const SPEED_STEP_MS: u64 = 4;

/// Points granted per food eaten.
pub const FOOD_POINTS: u32 = 10;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Solid block filling one cell (`CELL_COLUMNS` wide).
pub const GLYPH_CELL: &str = "██";

/// Colors applied to all visual elements of the terminal front-end.
///
/// The head color must differ from the body color so the head stays
/// recognizable at speed.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green-on-black default theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::Green,
    border_bg: Color::Black,
    hud_text: Color::DarkGray,
    hud_accent: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};
