//! UI plugin - camera, death message, and game flow reporting.

use bevy::prelude::*;

use crate::game::{
    DEATH_MESSAGE, DEATH_TEXT_COLOR, DEATH_TEXT_OFFSET, DEATH_TEXT_SIZE, DeathCause,
    DeathMessage, GameEvent, GameState,
};
use crate::snake::advance_game;

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (report_game_flow, update_death_message)
                .chain()
                .after(advance_game),
        );
    }
}

/// Initial setup system - camera and the (hidden) death message.
fn setup_system(mut commands: Commands, game_state: Res<GameState>) {
    commands.spawn(Camera2d);

    commands.spawn((
        Text::new(DEATH_MESSAGE),
        TextFont {
            font_size: DEATH_TEXT_SIZE,
            ..default()
        },
        TextColor(DEATH_TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(DEATH_TEXT_OFFSET),
            left: Val::Px(DEATH_TEXT_OFFSET),
            ..default()
        },
        Visibility::Hidden,
        DeathMessage,
    ));

    info!(
        "Game started: {}x{} board, {} food",
        game_state.config().edge,
        game_state.config().edge,
        game_state.food().len()
    );
}

/// System to show the death message only while the snake is dead.
fn update_death_message(
    game_state: Res<GameState>,
    mut query: Query<&mut Visibility, With<DeathMessage>>,
) {
    if let Ok(mut visibility) = query.single_mut() {
        let wanted = if game_state.is_alive() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        visibility.set_if_neq(wanted);
    }
}

/// System to log deaths and restarts.
fn report_game_flow(mut events: MessageReader<GameEvent>) {
    for event in events.read() {
        match event {
            GameEvent::Died { cause, length } => {
                let cause = match cause {
                    DeathCause::Wall => "hit a wall",
                    DeathCause::SelfCollision => "ran into itself",
                };
                info!("Game over: snake {} at length {}", cause, length);
            }
            GameEvent::Reset => info!("Game restarted"),
            GameEvent::Ticked { head } => trace!("Head moved to ({}, {})", head.x, head.y),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn death_message_visibility(app: &mut App) -> Visibility {
        let mut query = app
            .world_mut()
            .query_filtered::<&Visibility, With<DeathMessage>>();
        *query.single(app.world()).expect("death message entity")
    }

    #[test]
    fn test_death_message_follows_lifecycle() {
        let mut app = App::new();
        app.insert_resource(GameState::seeded(GameConfig::default(), 5))
            .add_systems(Update, update_death_message);
        app.world_mut().spawn((Visibility::Hidden, DeathMessage));

        app.update();
        assert_eq!(death_message_visibility(&mut app), Visibility::Hidden);

        {
            let mut state = app.world_mut().resource_mut::<GameState>();
            while state.is_alive() {
                state.tick();
            }
        }
        app.update();
        assert_eq!(death_message_visibility(&mut app), Visibility::Visible);

        // Stays up on later frames with no state change.
        app.update();
        assert_eq!(death_message_visibility(&mut app), Visibility::Visible);

        app.world_mut().resource_mut::<GameState>().reset();
        app.update();
        assert_eq!(death_message_visibility(&mut app), Visibility::Hidden);
    }
}
