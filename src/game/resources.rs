//! Game configuration.

use std::time::Duration;

use super::{INITIAL_FOOD_COUNT, MAP_EDGE_LEN, MAX_SPAWN_ATTEMPTS, Position, TICK_INTERVAL};

/// Board and timing parameters owned by the game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Board edge length in cells.
    pub edge: i32,
    pub tick_interval: Duration,
    pub initial_food: usize,
    /// Rejection-sampling attempts before falling back to a free-cell scan.
    pub max_spawn_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            edge: MAP_EDGE_LEN,
            tick_interval: TICK_INTERVAL,
            initial_food: INITIAL_FOOD_COUNT,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Starting cell of the snake head.
    pub fn center(&self) -> Position {
        Position::new(self.edge / 2, self.edge / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.edge, 16);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.initial_food, 3);
        assert_eq!(config.center(), Position::new(8, 8));
    }
}
