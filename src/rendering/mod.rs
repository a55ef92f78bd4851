//! Rendering plugin - draws the board from the game state every frame.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    CELL_SIZE, FOOD_COLOR, GameState, Position, SNAKE_COLOR, WINDOW_SIZE, Z_FOOD, Z_SNAKE_SEGMENT,
};
use crate::snake::advance_game;

/// Plugin for drawing snake segments and food.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_board.after(advance_game));
    }
}

/// Window-space rect (origin top-left, y down) covered by a food item.
/// Food is drawn one pixel larger than a cell.
pub fn food_rect(position: Position) -> Rect {
    cell_rect(position, CELL_SIZE + 1.0)
}

/// Window-space rect covered by a snake segment, leaving a one pixel gap.
pub fn segment_rect(position: Position) -> Rect {
    cell_rect(position, CELL_SIZE - 1.0)
}

fn cell_rect(position: Position, size: f32) -> Rect {
    let min = Vec2::new(
        position.x as f32 * CELL_SIZE + 1.0,
        position.y as f32 * CELL_SIZE + 1.0,
    );
    Rect::from_corners(min, min + Vec2::splat(size))
}

/// Converts a window-space point to 2D world space (origin centered, y up).
pub fn to_world(point: Vec2) -> Vec2 {
    let half = WINDOW_SIZE as f32 / 2.0;
    Vec2::new(point.x - half, half - point.y)
}

/// System to draw food and snake segments as filled rects.
fn draw_board(mut painter: ShapePainter, game_state: Res<GameState>) {
    let board = game_state.render_data();

    painter.color = FOOD_COLOR;
    for food in board.food {
        let rect = food_rect(*food);
        painter.set_translation(to_world(rect.center()).extend(Z_FOOD));
        painter.rect(rect.size());
    }

    painter.color = SNAKE_COLOR;
    for segment in board.segments {
        let rect = segment_rect(segment.position);
        painter.set_translation(to_world(rect.center()).extend(Z_SNAKE_SEGMENT));
        painter.rect(rect.size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let food = food_rect(Position::new(2, 3));
        assert_eq!(food.min, Vec2::new(81.0, 121.0));
        assert_eq!(food.size(), Vec2::splat(41.0));

        let segment = segment_rect(Position::new(2, 3));
        assert_eq!(segment.min, Vec2::new(81.0, 121.0));
        assert_eq!(segment.size(), Vec2::splat(39.0));
    }

    #[test]
    fn test_to_world_flips_y() {
        assert_eq!(to_world(Vec2::new(0.0, 0.0)), Vec2::new(-320.0, 320.0));
        assert_eq!(to_world(Vec2::new(320.0, 320.0)), Vec2::ZERO);
        assert_eq!(to_world(Vec2::new(640.0, 640.0)), Vec2::new(320.0, -320.0));
    }
}
