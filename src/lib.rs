//! Tick-driven snake game.
//!
//! The engine in [`game`] owns all mutable state and advances it once per
//! [`game::GameState::tick`]; input only ever fills the single-slot
//! direction queue. The terminal modules render snapshots and drive the timer.

pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
