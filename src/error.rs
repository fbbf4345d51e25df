use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Cell;

/// Errors raised when a game or its configuration cannot be constructed.
///
/// Gameplay itself never fails; every variant describes malformed input
/// rejected before the first tick.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(
        "bounds x={x_min}..={x_max}, y={y_min}..={y_max} are empty or touch the i32 limits"
    )]
    InvalidBounds {
        x_min: i32,
        x_max: i32,
        y_min: i32,
        y_max: i32,
    },

    #[error("initial snake must have at least one segment")]
    EmptySnake,

    #[error("initial snake segment ({}, {}) lies outside the playable area", .0.x, .0.y)]
    SnakeOutOfBounds(Cell),

    #[error("initial snake occupies ({}, {}) more than once", .0.x, .0.y)]
    SnakeOverlaps(Cell),

    #[error("no free cell left for food")]
    NoFreeCell,

    #[error("display {width}x{height} is too small for a single {cell_size}px cell")]
    DisplayTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("cell size must be at least 1")]
    InvalidCellSize,

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<GameError> for io::Error {
    fn from(error: GameError) -> Self {
        let kind = match &error {
            GameError::ConfigRead { source, .. } => source.kind(),
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, error)
    }
}
