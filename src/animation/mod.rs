//! Animation domain: parameter store, actor adapters, and clip playback.

mod clips;
mod enemy;
mod params;
mod player;
#[cfg(test)]
mod tests;

pub use clips::{AnimationController, AnimationState, resolve_state};
pub use enemy::{EnemyAnimFrame, EnemyAnimator};
pub use params::{AnimatorParameters, param};
pub use player::{PlayerAnimFrame, PlayerAnimator};

use bevy::prelude::*;

use crate::animation::clips::{apply_clip_tint, resolve_animation_states, update_animation_frames};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                resolve_animation_states,
                update_animation_frames,
                apply_clip_tint,
            )
                .chain(),
        );
    }
}
