use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use serde::{Deserialize, Serialize};

use crate::config::COLUMNS_PER_CELL;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Column and row delta of a single step.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Reload,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// Keeping the current heading is always legal.
#[must_use]
pub fn is_valid_move(current: Direction, candidate: Direction) -> bool {
    candidate != current.opposite()
}

/// Maps a finished swipe translation to a direction.
///
/// The dominant axis wins; equal magnitudes resolve on the vertical axis.
/// A gesture that did not move yields `None`.
#[must_use]
pub fn swipe_direction(translation_x: f32, translation_y: f32) -> Option<Direction> {
    if translation_x == 0.0 && translation_y == 0.0 {
        return None;
    }

    if translation_x.abs() > translation_y.abs() {
        Some(if translation_x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if translation_y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Translates one key press into a game input.
#[must_use]
pub fn input_from_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => GameInput::Direction(Direction::Right),
        KeyCode::Char('p' | 'P' | ' ') => GameInput::Pause,
        KeyCode::Char('r' | 'R') => GameInput::Reload,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Turns terminal events into game inputs, tracking an in-progress drag.
///
/// A left-button press starts a drag; the matching release is read as a
/// swipe from the press position. Columns are scaled by `COLUMNS_PER_CELL`
/// so both axes are measured in display units.
#[derive(Debug, Default)]
pub struct InputHandler {
    drag_start: Option<(u16, u16)>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits up to `timeout` for one terminal event and maps it to a game input.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(self.handle_event(event::read()?))
    }

    pub fn handle_event(&mut self, event: Event) -> Option<GameInput> {
        match event {
            Event::Key(key) => input_from_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<GameInput> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_start = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::Up(_) => {
                let (column, row) = self.drag_start.take()?;
                let columns = f32::from(mouse.column) - f32::from(column);
                let dx = columns / f32::from(COLUMNS_PER_CELL);
                let dy = f32::from(mouse.row) - f32::from(row);
                swipe_direction(dx, dy).map(GameInput::Direction)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    };

    use super::{
        Direction, GameInput, InputHandler, input_from_key, is_valid_move, swipe_direction,
    };

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversals_are_the_only_invalid_moves() {
        for current in Direction::ALL {
            for candidate in Direction::ALL {
                let expected = candidate != current.opposite();
                assert_eq!(
                    is_valid_move(current, candidate),
                    expected,
                    "{current:?} -> {candidate:?}"
                );
            }
        }

        assert!(!is_valid_move(Direction::Up, Direction::Down));
        assert!(!is_valid_move(Direction::Right, Direction::Left));
        assert!(is_valid_move(Direction::Left, Direction::Left));
    }

    #[test]
    fn swipe_uses_dominant_axis() {
        assert_eq!(swipe_direction(40.0, 5.0), Some(Direction::Right));
        assert_eq!(swipe_direction(-40.0, 5.0), Some(Direction::Left));
        assert_eq!(swipe_direction(3.0, 20.0), Some(Direction::Down));
        assert_eq!(swipe_direction(3.0, -20.0), Some(Direction::Up));
    }

    #[test]
    fn swipe_tie_resolves_vertically() {
        assert_eq!(swipe_direction(10.0, 10.0), Some(Direction::Down));
        assert_eq!(swipe_direction(10.0, -10.0), Some(Direction::Up));
        assert_eq!(swipe_direction(0.0, 0.0), None);
    }

    #[test]
    fn keys_map_to_inputs() {
        assert_eq!(
            input_from_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            input_from_key(press(KeyCode::Char('l'))),
            Some(GameInput::Direction(Direction::Right))
        );
        assert_eq!(input_from_key(press(KeyCode::Char(' '))), Some(GameInput::Pause));
        assert_eq!(input_from_key(press(KeyCode::Char('r'))), Some(GameInput::Reload));
        assert_eq!(input_from_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(input_from_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(input_from_key(release), None);
    }

    #[test]
    fn horizontal_drag_is_a_swipe_right() {
        let mut handler = InputHandler::new();

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 10, 5);
        assert_eq!(handler.handle_event(down), None);
        assert_eq!(
            handler.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 20, 6)),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn columns_count_half_as_much_as_rows() {
        let mut handler = InputHandler::new();

        handler.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        handler.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 13, 6));

        // 4 columns is 2 display units, less than the 3 rows moved
        assert_eq!(
            handler.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 14, 8)),
            Some(GameInput::Direction(Direction::Down))
        );
    }

    #[test]
    fn click_and_stray_release_are_ignored() {
        let mut handler = InputHandler::new();

        handler.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 7, 7));
        let click = mouse(MouseEventKind::Up(MouseButton::Left), 7, 7);
        assert_eq!(handler.handle_event(click), None);

        let stray = mouse(MouseEventKind::Up(MouseButton::Left), 1, 7);
        assert_eq!(handler.handle_event(stray), None);
    }

    #[test]
    fn key_events_pass_through_the_handler() {
        let mut handler = InputHandler::new();

        assert_eq!(
            handler.handle_event(Event::Key(press(KeyCode::Char('p')))),
            Some(GameInput::Pause)
        );
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}
