//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Why the snake died.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeathCause {
    Wall,
    SelfCollision,
}

/// Something the game state did during a frame.
#[derive(Message, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// The snake advanced one cell.
    Ticked { head: Position },
    /// The head reached a food item and the snake grew.
    FoodEaten { position: Position, length: usize },
    /// A food item was placed on the board.
    FoodSpawned { position: Position, manual: bool },
    /// No free cell was left for a replacement food item.
    BoardFull,
    /// The snake hit a wall or itself.
    Died { cause: DeathCause, length: usize },
    /// The board was rebuilt in its starting state.
    Reset,
}
