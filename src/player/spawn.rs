//! Player domain: entity assembly.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::GameLayer;
use crate::animation::{AnimationController, AnimatorParameters, PlayerAnimator};
use crate::audio::SoundQueue;
use crate::level::LevelEntity;
use crate::player::{AttackHitbox, Player, PlayerController, PlayerTuning};

const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

pub fn spawn_player(commands: &mut Commands, tuning: &PlayerTuning, at: Vec2) -> Entity {
    let (width, height) = tuning.body_size;
    info!("Spawning player at ({:.0}, {:.0})", at.x, at.y);

    commands
        .spawn((
            // Identity & behaviour
            (
                Player,
                LevelEntity,
                PlayerController::default(),
                AttackHitbox::default(),
                SoundQueue::default(),
            ),
            // Animation
            (
                PlayerAnimator::default(),
                AnimatorParameters::default(),
                AnimationController::new(PLAYER_COLOR),
            ),
            // Rendering
            Sprite {
                color: PLAYER_COLOR,
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(width, height),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id()
}
