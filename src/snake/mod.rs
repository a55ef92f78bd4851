//! Snake plugin - samples input each frame and drives the game state.

use bevy::prelude::*;

use crate::game::{DirectionKeys, FrameInput, GameEvent, GameState};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .add_message::<GameEvent>()
            .add_systems(Update, advance_game);
    }
}

/// Reads this frame's keyboard and mouse state.
pub fn sample_input(
    keyboard_input: &ButtonInput<KeyCode>,
    mouse_input: &ButtonInput<MouseButton>,
) -> FrameInput {
    FrameInput {
        keys: DirectionKeys::from_input(keyboard_input),
        reset: keyboard_input.just_pressed(KeyCode::Space),
        spawn_food: mouse_input.just_pressed(MouseButton::Left),
    }
}

/// System to feed input and frame time into the game state.
pub fn advance_game(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut game_state: ResMut<GameState>,
    mut events: MessageWriter<GameEvent>,
) {
    let input = sample_input(&keyboard_input, &mouse_input);
    let frame_events = game_state.update(&input, time.delta_secs());
    events.write_batch(frame_events);
}
