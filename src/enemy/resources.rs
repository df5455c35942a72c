//! Enemy domain: tuning resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Tunables shared by every enemy. Distances are in pixels, times in seconds.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub max_health: i32,
    /// Time between death and removal.
    pub destroy_delay: f32,
    pub walk_speed: f32,
    /// Half-width of the patrol strip around the spawn x.
    pub patrol_range: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    /// How long an attack holds the enemy in place.
    pub attack_duration: f32,
    pub knockback_speed: f32,
    pub ground_check_offset: f32,
    pub ground_radius: f32,
    pub body_size: (f32, f32),
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_health: 3,
            destroy_delay: 2.0,
            walk_speed: 96.0,
            patrol_range: 160.0,
            detection_range: 160.0,
            attack_range: 32.0,
            attack_cooldown: 1.5,
            attack_duration: 0.5,
            knockback_speed: 96.0,
            ground_check_offset: 16.0,
            ground_radius: 6.4,
            body_size: (32.0, 32.0),
        }
    }
}
