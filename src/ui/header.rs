use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::PALETTE;
use crate::game::{GameStatus, Snapshot};

const SEPARATOR: &str = " │ ";

/// Draws the one-line header: score and length on the left, controls on the right.
pub fn render_header(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let line = header_line(
        snapshot.score,
        snapshot.snake.len(),
        snapshot.status,
        usize::from(area.width),
    );

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(PALETTE.frame)),
        area,
    );
}

/// Builds the header, switching to compact labels and dropping the control
/// hints when the line would not fit `available_width`.
#[must_use]
pub fn header_line(
    score: u32,
    length: usize,
    status: GameStatus,
    available_width: usize,
) -> Line<'static> {
    let full = stats_text(score, length, false);
    let compact_stats = full.width() > available_width;
    let stats = if compact_stats {
        stats_text(score, length, true)
    } else {
        full
    };

    let hints = controls_text(status);
    let used = stats.width() + hints.width();

    let mut spans = vec![Span::styled(
        stats,
        Style::default()
            .fg(PALETTE.header_fg)
            .add_modifier(Modifier::BOLD),
    )];

    if used < available_width {
        spans.push(Span::raw(" ".repeat(available_width - used)));
        spans.push(Span::styled(
            hints,
            Style::default().fg(PALETTE.header_muted),
        ));
    }

    Line::from(spans)
}

fn stats_text(score: u32, length: usize, compact: bool) -> String {
    let (score_label, length_label) = if compact {
        ("S", "L")
    } else {
        ("Score", "Length")
    };

    format!(" {score_label}: {score}{SEPARATOR}{length_label}: {length}")
}

fn controls_text(status: GameStatus) -> String {
    let pause = match status {
        GameStatus::Paused => "[P] Resume",
        _ => "[P] Pause",
    };

    format!("{pause}{SEPARATOR}[R] Reload{SEPARATOR}[Q] Quit ")
}
