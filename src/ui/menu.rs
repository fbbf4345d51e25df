use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::collision::DeathReason;
use crate::config::PALETTE;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        title("PAUSED"),
        Line::from(""),
        Line::from("[P]/[Space] Resume"),
        Line::from("Arrows or mouse drag to steer"),
        Line::from("[R] Reload"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, 60, 40);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
) {
    let lines = vec![
        title("GAME OVER"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(match death_reason {
            Some(DeathReason::Wall) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("[R] Play Again"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " game over ", lines, 70, 50);
}

/// Draws the board-full screen as a centered popup.
pub fn render_won_menu(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let lines = vec![
        title("BOARD CLEARED"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[R] Play Again"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " you win ", lines, 70, 50);
}

fn title(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(PALETTE.menu_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    block_title: &'static str,
    lines: Vec<Line<'static>>,
    width_percent: u16,
    height_percent: u16,
) {
    let popup = centered_popup(area, width_percent, height_percent);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(block_title)),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
