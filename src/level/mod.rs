//! Level domain: data-driven layout, spawning on play, teardown on exit.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Deserialize;

use crate::actor::GameLayer;
use crate::enemy::{EnemyTuning, spawn_enemy};
use crate::game::GameState;
use crate::player::{PlayerTuning, spawn_player};

/// Marker for everything that belongs to the running level.
#[derive(Component, Debug)]
pub struct LevelEntity;

#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
}

/// Level layout in world pixels.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelDef {
    pub player_spawn: (f32, f32),
    pub platforms: Vec<PlatformDef>,
    pub enemy_spawns: Vec<(f32, f32)>,
}

impl Default for LevelDef {
    fn default() -> Self {
        let platform = |x: f32, y: f32, w: f32, h: f32| PlatformDef {
            center: (x, y),
            size: (w, h),
        };
        Self {
            player_spawn: (-300.0, 40.0),
            platforms: vec![
                platform(0.0, -16.0, 800.0, 32.0),
                // Past the pit
                platform(900.0, -16.0, 600.0, 32.0),
                platform(120.0, 96.0, 160.0, 20.0),
                platform(700.0, 150.0, 120.0, 20.0),
            ],
            enemy_spawns: vec![(200.0, 40.0), (900.0, 40.0)],
        }
    }
}

const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);

pub(crate) fn spawn_level(
    mut commands: Commands,
    level: Res<LevelDef>,
    player_tuning: Res<PlayerTuning>,
    enemy_tuning: Res<EnemyTuning>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    for platform in &level.platforms {
        let (width, height) = platform.size;
        commands.spawn((
            Ground,
            LevelEntity,
            Sprite {
                color: GROUND_COLOR,
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(platform.center.0, platform.center.1, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, height),
            ground_layers,
        ));
    }

    let spawn = Vec2::from(level.player_spawn);
    spawn_player(&mut commands, &player_tuning, spawn);

    for &(x, y) in &level.enemy_spawns {
        spawn_enemy(&mut commands, &enemy_tuning, Vec2::new(x, y));
    }

    // Snap instead of sweeping across the map from the last death point
    for mut camera in &mut camera_query {
        camera.translation.x = spawn.x;
        camera.translation.y = spawn.y;
    }

    info!(
        "Level spawned: {} platforms, {} enemies",
        level.platforms.len(),
        level.enemy_spawns.len()
    );
}

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Level cleanup: despawned {} entities", count);
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelDef>()
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(OnExit(GameState::Playing), cleanup_level);
    }
}
