//! Game constants for board size, colors, timing, and text.

use bevy::prelude::*;
use std::time::Duration;

// Board dimensions (square, in cells)
pub const MAP_EDGE_LEN: i32 = 16;

// Window
pub const WINDOW_SIZE: u32 = 640;
pub const WINDOW_TITLE: &str = "snake";
pub const CELL_SIZE: f32 = WINDOW_SIZE as f32 / MAP_EDGE_LEN as f32;

// Timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

// Food
pub const INITIAL_FOOD_COUNT: usize = 3;
pub const MAX_SPAWN_ATTEMPTS: usize = 256;

// Colors
pub const SNAKE_COLOR: Color = Color::WHITE;
pub const FOOD_COLOR: Color = Color::srgb(0.9, 0.16, 0.22);
pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const DEATH_TEXT_COLOR: Color = Color::srgb(0.51, 0.51, 0.51);

// Death message
pub const DEATH_MESSAGE: &str = "YOU ARE DEAD. TRY AGAIN.";
pub const DEATH_TEXT_SIZE: f32 = 30.0;
pub const DEATH_TEXT_OFFSET: f32 = 100.0;

// Z-index constants for rendering layers
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 2.0;
