use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::GameError;
use crate::game::GameSetup;
use crate::grid::{Bounds, Cell};
use crate::input::Direction;

/// Interval between gameplay ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Points granted per food eaten.
pub const SCORE_INCREMENT: u32 = 10;

/// Border drawn around the playable rectangle, in display units.
pub const DEFAULT_BORDER_WIDTH: u32 = 1;

/// Number of cells that fit along the shorter display side.
pub const CELLS_ACROSS_SHORT_SIDE: u32 = 20;

/// Head position of a fresh game.
pub const INITIAL_HEAD: Cell = Cell::new(5, 5);

/// Heading of a fresh game.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Display dimensions the grid is fitted into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Display {
    pub width: u32,
    pub height: u32,
}

/// Derives the cell size from the shorter display side, never below 1.
#[must_use]
pub fn derived_cell_size(display: Display) -> u32 {
    (display.width.min(display.height) / CELLS_ACROSS_SHORT_SIDE).max(1)
}

/// Fits as many whole cells as possible inside the display minus its border.
pub fn bounds_for_display(
    display: Display,
    cell_size: u32,
    border_width: u32,
) -> Result<Bounds, GameError> {
    if cell_size == 0 {
        return Err(GameError::InvalidCellSize);
    }

    let border = border_width.saturating_mul(2);
    let columns = display.width.saturating_sub(border) / cell_size;
    let rows = display.height.saturating_sub(border) / cell_size;

    if columns == 0 || rows == 0 {
        return Err(GameError::DisplayTooSmall {
            width: display.width,
            height: display.height,
            cell_size,
        });
    }

    Bounds::with_size(columns, rows)
}

/// Tunables read from an optional JSON file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub tick_interval_ms: u64,
    pub score_increment: u32,
    pub border_width: u32,
    /// Fixed cell size; derived from the display when absent.
    pub cell_size: Option<u32>,
    pub initial_snake: Vec<Cell>,
    pub initial_direction: Direction,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            score_increment: SCORE_INCREMENT,
            border_width: DEFAULT_BORDER_WIDTH,
            cell_size: None,
            initial_snake: vec![INITIAL_HEAD],
            initial_direction: INITIAL_DIRECTION,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let raw = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Cell size for `display`, honouring an explicit override.
    #[must_use]
    pub fn cell_size_for(&self, display: Display) -> u32 {
        self.cell_size.unwrap_or_else(|| derived_cell_size(display))
    }

    /// Playable rectangle for `display`.
    pub fn bounds_for(&self, display: Display) -> Result<Bounds, GameError> {
        bounds_for_display(display, self.cell_size_for(display), self.border_width)
    }

    /// Starting configuration of a game played inside `bounds`.
    #[must_use]
    pub fn setup(&self, bounds: Bounds) -> GameSetup {
        GameSetup {
            bounds,
            initial_snake: self.initial_snake.clone(),
            initial_direction: self.initial_direction,
            score_increment: self.score_increment,
        }
    }
}

/// Colors used by the terminal renderer.
#[derive(Debug)]
pub struct Palette {
    pub frame: Color,
    pub cell_even: Color,
    pub cell_odd: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub header_fg: Color,
    pub header_muted: Color,
    pub menu_title: Color,
}

pub const PALETTE: Palette = Palette {
    frame: Color::Rgb(0x1d, 0x3b, 0x2a),
    cell_even: Color::Rgb(0xa7, 0xd9, 0x48),
    cell_odd: Color::Rgb(0x8e, 0xcc, 0x39),
    snake_head: Color::Rgb(0x1f, 0x4e, 0xa8),
    snake_body: Color::Rgb(0x42, 0x7b, 0xd8),
    food: Color::Rgb(0xe7, 0x47, 0x1d),
    header_fg: Color::White,
    header_muted: Color::Gray,
    menu_title: Color::Yellow,
};

/// Food glyph; drawn once per cell row.
pub const GLYPH_FOOD: &str = "●";

/// Full block used for snake segments.
pub const GLYPH_BLOCK: &str = "█";

/// Terminal columns per logical cell unit, keeping cells roughly square.
pub const COLUMNS_PER_CELL: u16 = 2;
