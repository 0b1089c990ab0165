use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::Game;
use crate::scheduler::TickScheduler;

const FULL_LABELS: [&str; 4] = ["Length ", "  Score ", "  Hi ", "  Tick "];
const COMPACT_LABELS: [&str; 4] = ["L ", "  S ", "  Hi ", "  T "];

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud<S: TickScheduler>(
    frame: &mut Frame<'_>,
    area: Rect,
    game: &Game<S>,
    theme: &Theme,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(game, theme, usize::from(status_area.width)))
            .alignment(Alignment::Right),
        status_area,
    );

    play_area
}

fn status_line<S: TickScheduler>(
    game: &Game<S>,
    theme: &Theme,
    available_width: usize,
) -> Line<'static> {
    let values = [
        game.snake.len().to_string(),
        game.score.to_string(),
        game.high_score().to_string(),
        format!("{}ms", game.tick_interval().as_millis()),
    ];

    // Fall back to compact labels when the terminal is too narrow for the
    // full line.
    let labels = if status_width(&FULL_LABELS, &values) > available_width {
        &COMPACT_LABELS
    } else {
        &FULL_LABELS
    };

    let muted = Style::new().fg(theme.hud_text);
    let accent = Style::new().fg(theme.hud_accent);

    let mut spans = Vec::with_capacity(values.len() * 2 + 1);
    for (label, value) in labels.iter().zip(values) {
        spans.push(Span::styled(*label, muted));
        spans.push(Span::styled(value, accent));
    }
    spans.push(Span::styled(" ", muted));

    Line::from(spans)
}

fn status_width(labels: &[&str; 4], values: &[String; 4]) -> usize {
    let label_width: usize = labels.iter().map(|label| label.width()).sum();
    let value_width: usize = values.iter().map(|value| value.as_str().width()).sum();
    label_width + value_width + 1
}
