use std::collections::HashSet;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::collision::{DeathReason, EAT_TOLERANCE, death_reason, is_food_eaten};
use crate::error::GameError;
use crate::food::{initial_forbidden, place_food_avoiding};
use crate::grid::{Bounds, Cell};
use crate::input::{Direction, GameInput, is_valid_move};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    /// The snake fills the whole board.
    Won,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Paused or finished; nothing changed.
    Idle,
    Moved,
    Ate,
    Died(DeathReason),
    Won,
}

/// Starting configuration a game is created from and reloaded to.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSetup {
    pub bounds: Bounds,
    pub initial_snake: Vec<Cell>,
    pub initial_direction: Direction,
    pub score_increment: u32,
}

impl GameSetup {
    /// Rejects empty, overlapping or out-of-bounds initial snakes.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.initial_snake.is_empty() {
            return Err(GameError::EmptySnake);
        }

        let mut seen = HashSet::with_capacity(self.initial_snake.len());
        for &cell in &self.initial_snake {
            if !self.bounds.contains(cell) {
                return Err(GameError::SnakeOutOfBounds(cell));
            }
            if !seen.insert(cell) {
                return Err(GameError::SnakeOverlaps(cell));
            }
        }

        Ok(())
    }
}

/// Render-relevant copy of the state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub bounds: Bounds,
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    direction: Direction,
    queued_direction: Option<Direction>,
    setup: GameSetup,
    rng: StdRng,
}

impl GameState {
    /// Creates a game seeded from the operating system.
    pub fn new(setup: GameSetup) -> Result<Self, GameError> {
        Self::with_rng(setup, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(setup: GameSetup, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(setup, StdRng::seed_from_u64(seed))
    }

    fn with_rng(setup: GameSetup, mut rng: StdRng) -> Result<Self, GameError> {
        let (snake, food) = starting_board(&setup, &mut rng)?;
        info!(
            "new game: {}x{} board, head at ({}, {})",
            setup.bounds.columns(),
            setup.bounds.rows(),
            snake.head().x,
            snake.head().y
        );

        Ok(Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            direction: setup.initial_direction,
            queued_direction: None,
            setup,
            rng,
        })
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;

        let effective = match self.queued_direction.take() {
            Some(queued) => {
                self.direction = queued;
                queued
            }
            None => self.direction,
        };

        let bounds = self.bounds();
        let new_head = self.snake.head().step(effective);
        let prospective = self.snake.prospective_body(new_head);

        if let Some(reason) = death_reason(&prospective, bounds) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over after {} ticks ({reason:?}), score {}",
                self.tick_count, self.score
            );
            return TickOutcome::Died(reason);
        }

        if !is_food_eaten(new_head, self.food, EAT_TOLERANCE) {
            self.snake.advance(new_head);
            return TickOutcome::Moved;
        }

        self.snake.grow(new_head);
        self.score = self.score.saturating_add(self.setup.score_increment);

        let food = if self.snake.len() < bounds.cell_count() {
            place_food_avoiding(&mut self.rng, bounds, &self.snake.cells())
        } else {
            None
        };

        match food {
            Some(food) => {
                debug!(
                    "ate at ({}, {}), length {}, next food ({}, {})",
                    new_head.x,
                    new_head.y,
                    self.snake.len(),
                    food.x,
                    food.y
                );
                debug_assert!(!self.snake.occupies(food));
                self.food = food;
                TickOutcome::Ate
            }
            None => {
                self.status = GameStatus::Won;
                info!("board full after {} ticks, score {}", self.tick_count, self.score);
                TickOutcome::Won
            }
        }
    }

    /// Offers a direction to the single-slot queue.
    ///
    /// Accepted only when the slot is empty and the move is not a reversal
    /// of the effective direction. Returns whether it was accepted.
    pub fn queue_direction(&mut self, candidate: Direction) -> bool {
        if self.is_finished() || self.queued_direction.is_some() {
            return false;
        }

        if !is_valid_move(self.effective_direction(), candidate) {
            return false;
        }

        debug!("queued {candidate:?}");
        self.queued_direction = Some(candidate);
        true
    }

    /// Switches between running and paused; finished games stay finished.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Resets to the starting configuration.
    pub fn reload(&mut self) -> Result<(), GameError> {
        self.reload_with_bounds(self.setup.bounds)
    }

    /// Resets to the starting configuration inside new bounds.
    ///
    /// On error the current state is left untouched.
    pub fn reload_with_bounds(&mut self, bounds: Bounds) -> Result<(), GameError> {
        let setup = GameSetup {
            bounds,
            ..self.setup.clone()
        };
        let (snake, food) = starting_board(&setup, &mut self.rng)?;

        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.direction = setup.initial_direction;
        self.queued_direction = None;
        self.setup = setup;
        info!("reloaded");

        Ok(())
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) -> Result<(), GameError> {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.queue_direction(direction);
            }
            GameInput::Pause => self.toggle_pause(),
            GameInput::Reload => self.reload()?,
            GameInput::Quit => {}
        }

        Ok(())
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn queued_direction(&self) -> Option<Direction> {
        self.queued_direction
    }

    /// Direction the next tick will use.
    #[must_use]
    pub fn effective_direction(&self) -> Direction {
        self.queued_direction.unwrap_or(self.direction)
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.setup.bounds
    }

    #[must_use]
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Returns true once no further tick can change the state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::Won)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bounds: self.bounds(),
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            status: self.status,
            death_reason: self.death_reason,
            tick_count: self.tick_count,
        }
    }
}

/// Validates `setup` and places the first food away from the opening path.
fn starting_board(setup: &GameSetup, rng: &mut StdRng) -> Result<(Snake, Cell), GameError> {
    setup.validate()?;

    let snake = Snake::from_segments(setup.initial_snake.clone());
    let forbidden = initial_forbidden(&setup.initial_snake, setup.initial_direction, setup.bounds);
    let food = place_food_avoiding(rng, setup.bounds, &forbidden)
        .or_else(|| place_food_avoiding(rng, setup.bounds, &snake.cells()))
        .ok_or(GameError::NoFreeCell)?;

    Ok((snake, food))
}
