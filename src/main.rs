mod actor;
mod animation;
mod audio;
mod config;
mod enemy;
mod game;
mod input;
mod level;
mod player;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "UAS Platformer".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(config::ConfigPlugin::default())
        .add_plugins((
            actor::ActorPlugin,
            game::GamePlugin,
            input::InputPlugin,
            player::PlayerPlugin,
            enemy::EnemyPlugin,
            animation::AnimationPlugin,
            audio::SoundPlugin,
            level::LevelPlugin,
        ))
        .run();
}
