use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::input::Direction;

/// Grid cell in logical (column, row) coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one unit along `direction`.
    ///
    /// Rows grow downwards: `Up` decrements `y`, `Down` increments it.
    /// Saturates at the `i32` limits, which always lie outside any [`Bounds`].
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Inclusive playable rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Bounds {
    /// Creates bounds, rejecting empty rectangles and rectangles touching
    /// the `i32` limits, so every cell inside has a representable neighbour.
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Result<Self, GameError> {
        let touches_limits = [x_min, x_max, y_min, y_max]
            .iter()
            .any(|edge| *edge == i32::MIN || *edge == i32::MAX);
        if x_min > x_max || y_min > y_max || touches_limits {
            return Err(GameError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Bounds anchored at the origin with the given column and row counts.
    pub fn with_size(columns: u32, rows: u32) -> Result<Self, GameError> {
        let x_max = i32::try_from(columns).unwrap_or(i32::MAX) - 1;
        let y_max = i32::try_from(rows).unwrap_or(i32::MAX) - 1;
        Self::new(0, x_max, 0, y_max)
    }

    /// Returns true when `cell` lies inside the rectangle on both axes.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        (self.x_min..=self.x_max).contains(&cell.x) && (self.y_min..=self.y_max).contains(&cell.y)
    }

    /// Column count; at most `u32::MAX - 2` since the limits are excluded.
    #[must_use]
    pub fn columns(self) -> u32 {
        self.x_max.abs_diff(self.x_min) + 1
    }

    #[must_use]
    pub fn rows(self) -> u32 {
        self.y_max.abs_diff(self.y_min) + 1
    }

    /// Returns the number of lattice points in the rectangle.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::try_from(u64::from(self.columns()) * u64::from(self.rows())).unwrap_or(usize::MAX)
    }
}
