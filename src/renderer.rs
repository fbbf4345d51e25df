use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    COLUMNS_PER_CELL, Display, GLYPH_BLOCK, GLYPH_FOOD, GameConfig, PALETTE, bounds_for_display,
};
use crate::error::GameError;
use crate::game::{GameStatus, Snapshot};
use crate::grid::{Bounds, Cell};
use crate::ui::header::render_header;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_won_menu};

/// Rows reserved above the board for the header.
pub const HEADER_HEIGHT: u16 = 1;

/// Terminal size of one logical cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellScale {
    pub columns: u16,
    pub rows: u16,
}

impl CellScale {
    /// Scale for a cell size expressed in display units.
    #[must_use]
    pub fn from_cell_size(cell_size: u32) -> Self {
        let rows = u16::try_from(cell_size.max(1)).unwrap_or(u16::MAX);
        Self {
            columns: rows.saturating_mul(COLUMNS_PER_CELL),
            rows,
        }
    }
}

/// Fits the board to a terminal of `size`, leaving room for the header.
///
/// Each display unit is one row tall and `COLUMNS_PER_CELL` columns wide.
pub fn board_layout(size: Size, config: &GameConfig) -> Result<(Bounds, CellScale), GameError> {
    let display = Display {
        width: u32::from(size.width / COLUMNS_PER_CELL),
        height: u32::from(size.height.saturating_sub(HEADER_HEIGHT)),
    };
    let cell_size = config.cell_size_for(display);
    let bounds = bounds_for_display(display, cell_size, config.border_width)?;

    Ok((bounds, CellScale::from_cell_size(cell_size)))
}

/// Splits the frame into header and board areas.
#[must_use]
pub fn split_frame(area: Rect) -> (Rect, Rect) {
    let [header, board] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    (header, board)
}

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, scale: CellScale) {
    let (header_area, board_area) = split_frame(frame.area());
    render_header(frame, header_area, snapshot);

    frame
        .buffer_mut()
        .set_style(board_area, Style::default().bg(PALETTE.frame));

    let board = centered_board(board_area, snapshot.bounds, scale);
    let block = Block::bordered()
        .border_style(Style::default().fg(PALETTE.frame).bg(PALETTE.frame));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let buffer = frame.buffer_mut();
    render_checkerboard(buffer, inner, snapshot.bounds, scale);
    if snapshot.status != GameStatus::Won {
        render_food(buffer, inner, snapshot, scale);
    }
    render_snake(buffer, inner, snapshot, scale);

    match snapshot.status {
        GameStatus::Paused => render_pause_menu(frame, board),
        GameStatus::GameOver => {
            render_game_over_menu(frame, board, snapshot.score, snapshot.death_reason);
        }
        GameStatus::Won => render_won_menu(frame, board, snapshot.score),
        GameStatus::Running => {}
    }
}

/// Bordered rectangle sized to the grid and centered in `area`.
#[must_use]
pub fn centered_board(area: Rect, bounds: Bounds, scale: CellScale) -> Rect {
    let width = grid_extent(bounds.columns(), scale.columns).saturating_add(2);
    let height = grid_extent(bounds.rows(), scale.rows).saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn grid_extent(cells: u32, per_cell: u16) -> u16 {
    u16::try_from(cells)
        .unwrap_or(u16::MAX)
        .saturating_mul(per_cell)
}

/// Terminal rectangle covered by `cell`, clipped to `inner`.
#[must_use]
pub fn cell_rect(inner: Rect, bounds: Bounds, scale: CellScale, cell: Cell) -> Option<Rect> {
    if !bounds.contains(cell) {
        return None;
    }

    let column = u16::try_from(cell.x.abs_diff(bounds.x_min)).ok()?;
    let row = u16::try_from(cell.y.abs_diff(bounds.y_min)).ok()?;

    let x = inner.x.saturating_add(column.saturating_mul(scale.columns));
    let y = inner.y.saturating_add(row.saturating_mul(scale.rows));
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some(Rect::new(x, y, scale.columns, scale.rows).intersection(inner))
}

fn render_checkerboard(buffer: &mut Buffer, inner: Rect, bounds: Bounds, scale: CellScale) {
    for y in bounds.y_min..=bounds.y_max {
        for x in bounds.x_min..=bounds.x_max {
            let cell = Cell::new(x, y);
            let Some(area) = cell_rect(inner, bounds, scale, cell) else {
                continue;
            };

            let parity =
                (u64::from(x.abs_diff(bounds.x_min)) + u64::from(y.abs_diff(bounds.y_min))) % 2;
            let color = if parity == 0 {
                PALETTE.cell_even
            } else {
                PALETTE.cell_odd
            };
            buffer.set_style(area, Style::default().bg(color));
        }
    }
}

fn render_food(buffer: &mut Buffer, inner: Rect, snapshot: &Snapshot, scale: CellScale) {
    let Some(area) = cell_rect(inner, snapshot.bounds, scale, snapshot.food) else {
        return;
    };

    let style = Style::default().fg(PALETTE.food).add_modifier(Modifier::BOLD);
    let x = area.x + area.width.saturating_sub(1) / 2;
    for y in area.top()..area.bottom() {
        buffer.set_string(x, y, GLYPH_FOOD, style);
    }
}

fn render_snake(buffer: &mut Buffer, inner: Rect, snapshot: &Snapshot, scale: CellScale) {
    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some(area) = cell_rect(inner, snapshot.bounds, scale, *segment) else {
            continue;
        };

        let color = if index == 0 {
            PALETTE.snake_head
        } else {
            PALETTE.snake_body
        };
        fill(buffer, area, GLYPH_BLOCK, Style::default().fg(color));
    }
}

fn fill(buffer: &mut Buffer, area: Rect, glyph: &str, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer.set_string(x, y, glyph, style);
        }
    }
}
