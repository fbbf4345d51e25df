use std::collections::{HashSet, VecDeque};

use crate::grid::Cell;

/// Snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Callers validate the segments; `GameState` rejects an empty body
    /// before it ever reaches this point.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Body after moving the head to `new_head` without growing.
    #[must_use]
    pub fn prospective_body(&self, new_head: Cell) -> Vec<Cell> {
        let kept = self.body.len().saturating_sub(1);
        std::iter::once(new_head)
            .chain(self.body.iter().take(kept).copied())
            .collect()
    }

    /// Moves to `new_head`, dropping the tail.
    pub fn advance(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
        let _ = self.body.pop_back();
        debug_assert!(!self.is_empty());
    }

    /// Moves to `new_head`, keeping the tail.
    pub fn grow(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Set of occupied cells, used as the food exclusion set.
    #[must_use]
    pub fn cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
