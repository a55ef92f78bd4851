mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use food::FoodPlugin;
use game::{BACKGROUND_COLOR, WINDOW_SIZE, WINDOW_TITLE};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(WINDOW_SIZE, WINDOW_SIZE),
                    title: WINDOW_TITLE.to_string(),
                    resizable: false,
                    ..Default::default()
                }),
                ..default()
            }),
            ShapePlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins((SnakePlugin, FoodPlugin, RenderingPlugin, UiPlugin))
        .run();
}
