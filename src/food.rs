use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Bounds, Cell};
use crate::input::Direction;

/// Cells in front of the initial head kept clear of the first food.
pub const INITIAL_FOOD_CLEARANCE: usize = 3;

/// Draws a cell uniformly over the inclusive rectangle.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Cell {
    Cell {
        x: rng.gen_range(bounds.x_min..=bounds.x_max),
        y: rng.gen_range(bounds.y_min..=bounds.y_max),
    }
}

/// Draws random cells until one falls outside `forbidden`.
///
/// Returns `None` without drawing when `forbidden` covers every cell of the
/// rectangle, since no draw could ever succeed.
#[must_use]
pub fn place_food_avoiding<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    forbidden: &HashSet<Cell>,
) -> Option<Cell> {
    let blocked = forbidden
        .iter()
        .filter(|cell| bounds.contains(**cell))
        .count();
    if blocked >= bounds.cell_count() {
        return None;
    }

    loop {
        let candidate = random_cell(rng, bounds);
        if !forbidden.contains(&candidate) {
            return Some(candidate);
        }
    }
}

/// Cells the first food must avoid: the snake itself plus the straight path
/// its head will take over the first few ticks.
#[must_use]
pub fn initial_forbidden(snake: &[Cell], direction: Direction, bounds: Bounds) -> HashSet<Cell> {
    let mut forbidden: HashSet<Cell> = snake.iter().copied().collect();

    if let Some(head) = snake.first() {
        let mut cursor = *head;
        for _ in 0..INITIAL_FOOD_CLEARANCE {
            cursor = cursor.step(direction);
            if !bounds.contains(cursor) {
                break;
            }
            forbidden.insert(cursor);
        }
    }

    forbidden
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{initial_forbidden, place_food_avoiding, random_cell};
    use crate::grid::{Bounds, Cell};
    use crate::input::Direction;

    #[test]
    fn random_cell_stays_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = Bounds::new(-3, 4, 2, 7).expect("bounds should be valid");

        for _ in 0..1_000 {
            let cell = random_cell(&mut rng, bounds);
            assert!(bounds.contains(cell), "{cell:?} escaped {bounds:?}");
        }
    }

    #[test]
    fn random_cell_reaches_every_corner() {
        let mut rng = StdRng::seed_from_u64(12);
        let bounds = Bounds::new(0, 2, 0, 2).expect("bounds should be valid");

        let seen: HashSet<Cell> = (0..500).map(|_| random_cell(&mut rng, bounds)).collect();

        assert_eq!(seen.len(), bounds.cell_count());
    }

    #[test]
    fn placement_never_returns_forbidden_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(0, 3, 0, 2).expect("bounds should be valid");
        let forbidden: HashSet<Cell> = (0..4)
            .flat_map(|x| (0..2).map(move |y| Cell::new(x, y)))
            .chain([Cell::new(0, 2), Cell::new(1, 2)])
            .collect();

        for _ in 0..200 {
            let food = place_food_avoiding(&mut rng, bounds, &forbidden)
                .expect("two free cells remain");
            assert!(!forbidden.contains(&food));
            assert!(food == Cell::new(2, 2) || food == Cell::new(3, 2));
        }
    }

    #[test]
    fn placement_on_full_board_returns_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::new(0, 1, 0, 1).expect("bounds should be valid");
        let forbidden: HashSet<Cell> = [
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(9, 9),
        ]
        .into_iter()
        .collect();

        assert_eq!(place_food_avoiding(&mut rng, bounds, &forbidden), None);
    }

    #[test]
    fn initial_forbidden_follows_heading() {
        let bounds = Bounds::new(0, 20, 0, 20).expect("bounds should be valid");

        let forbidden = initial_forbidden(&[Cell::new(5, 5)], Direction::Right, bounds);

        let expected: HashSet<Cell> = [
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(7, 5),
            Cell::new(8, 5),
        ]
        .into_iter()
        .collect();
        assert_eq!(forbidden, expected);
    }

    #[test]
    fn initial_forbidden_is_clipped_at_the_wall() {
        let bounds = Bounds::new(0, 6, 0, 6).expect("bounds should be valid");

        let forbidden = initial_forbidden(&[Cell::new(1, 5), Cell::new(1, 6)], Direction::Up, bounds);

        assert!(forbidden.contains(&Cell::new(1, 2)));
        assert!(forbidden.contains(&Cell::new(1, 6)));
        assert_eq!(forbidden.len(), 5);

        let at_edge = initial_forbidden(&[Cell::new(6, 0)], Direction::Right, bounds);
        assert_eq!(at_edge.len(), 1);
    }
}
