//! Enemy domain: entity assembly.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::GameLayer;
use crate::animation::{AnimationController, AnimatorParameters, EnemyAnimator};
use crate::enemy::{Enemy, EnemyBrain, EnemyTuning};
use crate::level::LevelEntity;

const ENEMY_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);

pub fn spawn_enemy(commands: &mut Commands, tuning: &EnemyTuning, at: Vec2) -> Entity {
    let (width, height) = tuning.body_size;

    commands
        .spawn((
            (
                Enemy,
                LevelEntity,
                EnemyBrain::new(at.x, tuning.max_health, tuning.patrol_range),
            ),
            (
                EnemyAnimator,
                AnimatorParameters::default(),
                AnimationController::new(ENEMY_COLOR),
            ),
            Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, 1.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(width, height),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
            ),
        ))
        .id()
}
