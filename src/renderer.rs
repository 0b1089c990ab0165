use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_COLUMNS, GLYPH_CELL, GRID_SIZE, Theme};
use crate::game::{BoardSnapshot, Game, GameStatus};
use crate::grid::Cell;
use crate::scheduler::TickScheduler;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render<S: TickScheduler>(frame: &mut Frame<'_>, game: &Game<S>, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, game, theme);
    let board = board_rect(play_area);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let snapshot = game.snapshot();
    render_food(frame, inner, snapshot.food, theme);
    render_snake(frame, inner, &snapshot, theme);

    match game.status() {
        GameStatus::Idle => render_start_menu(frame, board, game.high_score(), theme),
        GameStatus::Paused => render_pause_menu(frame, board, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            board,
            game.score,
            game.high_score(),
            game.is_new_high_score(),
            game.death_cause(),
            theme,
        ),
        GameStatus::Running => {}
    }
}

/// Centers the bordered board in `area`, clamped to what fits.
fn board_rect(area: Rect) -> Rect {
    let width = (GRID_SIZE as u16 * CELL_COLUMNS + 2).min(area.width);
    let height = (GRID_SIZE as u16 + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Cell, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &BoardSnapshot, theme: &Theme) {
    let head = snapshot.snake.first().copied();
    let tail = snapshot.snake.last().copied();

    let buffer = frame.buffer_mut();
    for cell in &snapshot.snake {
        let Some((x, y)) = cell_to_terminal(inner, *cell) else {
            continue;
        };

        let style = if Some(*cell) == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else if Some(*cell) == tail {
            Style::new().fg(theme.snake_tail)
        } else {
            Style::new().fg(theme.snake_body)
        };

        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn cell_to_terminal(inner: Rect, cell: Cell) -> Option<(u16, u16)> {
    if !cell.in_bounds() {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
