//! Player domain: tuning resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Player tunables. Distances are in pixels, times in seconds.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_force: f32,
    /// Jumps allowed before touching ground again (2 = double jump).
    pub max_jump_count: u32,
    pub coyote_time: f32,
    /// Two presses of the same direction within this window start a run.
    pub double_tap_window: f32,
    /// Multiplied by the fixed step to get the dash velocity.
    pub dash_force: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub attack_duration: f32,
    pub attack_damage: i32,
    /// Hitbox centre distance in front of the body.
    pub hitbox_offset: f32,
    pub hitbox_size: (f32, f32),
    /// Foot anchor distance below the body centre.
    pub ground_check_offset: f32,
    /// Must stay below the first-step rise after a jump
    /// (`jump_force * dt - gravity * dt^2`), or the ground check still
    /// touches the floor on the tick after take-off and refunds the jump.
    pub ground_radius: f32,
    /// Vertical speeds below this count as grounded even without contact.
    pub grounded_velocity_epsilon: f32,
    pub fall_threshold_y: f32,
    /// Delay between fall-death and game over.
    pub game_over_delay: f32,
    pub body_size: (f32, f32),
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            walk_speed: 160.0,
            run_speed: 288.0,
            jump_force: 384.0,
            max_jump_count: 2,
            coyote_time: 0.15,
            double_tap_window: 0.3,
            dash_force: 24000.0,
            dash_duration: 0.2,
            dash_cooldown: 0.5,
            attack_duration: 0.3,
            attack_damage: 1,
            hitbox_offset: 24.0,
            hitbox_size: (32.0, 40.0),
            ground_check_offset: 24.0,
            ground_radius: 4.0,
            grounded_velocity_epsilon: 1.6,
            fall_threshold_y: -320.0,
            game_over_delay: 1.2,
            body_size: (24.0, 48.0),
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Fraction of the remaining distance covered per second.
    pub follow_sharpness: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_sharpness: 5.0,
        }
    }
}
