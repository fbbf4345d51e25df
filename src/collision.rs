use serde::Serialize;

use crate::grid::{Bounds, Cell};

/// Tolerance used by the engine: exact cell overlap.
pub const EAT_TOLERANCE: i32 = 1;

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Returns true iff any coordinate lies strictly outside its axis range.
#[must_use]
pub fn is_out_of_bounds(cell: Cell, bounds: Bounds) -> bool {
    !bounds.contains(cell)
}

/// Returns true iff the head equals any other body cell.
///
/// `body` is head-first and must be the prospective body: head moved and
/// tail already dropped unless the snake grew.
#[must_use]
pub fn is_self_collision(body: &[Cell]) -> bool {
    let Some((head, rest)) = body.split_first() else {
        return false;
    };

    rest.contains(head)
}

#[must_use]
pub fn is_game_over(body: &[Cell], bounds: Bounds) -> bool {
    death_reason(body, bounds).is_some()
}

/// Classifies a prospective body, checking the wall before the body.
#[must_use]
pub fn death_reason(body: &[Cell], bounds: Bounds) -> Option<DeathReason> {
    let head = body.first()?;

    if is_out_of_bounds(*head, bounds) {
        return Some(DeathReason::Wall);
    }

    if is_self_collision(body) {
        return Some(DeathReason::SelfCollision);
    }

    None
}

/// Returns true when head and food are closer than `tolerance` on both axes.
#[must_use]
pub fn is_food_eaten(head: Cell, food: Cell, tolerance: i32) -> bool {
    let tolerance = i64::from(tolerance);
    (i64::from(head.x) - i64::from(food.x)).abs() < tolerance
        && (i64::from(head.y) - i64::from(food.y)).abs() < tolerance
}
