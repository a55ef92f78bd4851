//! Grid types shared by the game state and the bevy systems.

use bevy::prelude::*;

/// Grid position of a snake segment or food item.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Whether this cell lies in `[0, edge)` on both axes.
    pub fn is_within(&self, edge: i32) -> bool {
        (0..edge).contains(&self.x) && (0..edge).contains(&self.y)
    }
}

/// Direction enum for snake movement. Grid `y` grows downwards.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step on the grid.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// One cell of the snake with the direction it moved in when last advanced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Segment {
    pub position: Position,
    pub direction: Direction,
}

/// Directional keys held during one frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionKeys {
    /// Reads arrow keys and WASD from the keyboard state.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>) -> Self {
        DirectionKeys {
            left: keyboard_input.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
            right: keyboard_input.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
            up: keyboard_input.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]),
            down: keyboard_input.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]),
        }
    }

    /// Held directions in sampling order; later entries take precedence.
    pub fn held(&self) -> impl Iterator<Item = Direction> {
        [
            (self.left, Direction::Left),
            (self.right, Direction::Right),
            (self.up, Direction::Up),
            (self.down, Direction::Down),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }
}

/// Everything the game state samples from the input devices in one frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct FrameInput {
    pub keys: DirectionKeys,
    /// Reset key went down this frame.
    pub reset: bool,
    /// Spawn-food button went down this frame.
    pub spawn_food: bool,
}

/// Component to mark the death message UI element.
#[derive(Component)]
pub struct DeathMessage;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_one_cell() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.step(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.step(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_is_within() {
        assert!(Position::new(0, 0).is_within(16));
        assert!(Position::new(15, 15).is_within(16));
        assert!(!Position::new(-1, 3).is_within(16));
        assert!(!Position::new(3, 16).is_within(16));
    }

    #[test]
    fn test_opposite_cancels_delta() {
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_held_keeps_sampling_order() {
        let keys = DirectionKeys {
            left: true,
            right: false,
            up: true,
            down: true,
        };
        let held: Vec<_> = keys.held().collect();
        assert_eq!(held, vec![Direction::Left, Direction::Up, Direction::Down]);
    }

    #[test]
    fn test_from_input_accepts_wasd() {
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::KeyW);
        input.press(KeyCode::ArrowLeft);
        let keys = DirectionKeys::from_input(&input);
        assert!(keys.up && keys.left);
        assert!(!keys.down && !keys.right);
    }
}
