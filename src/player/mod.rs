//! Player domain: movement state machine, attack hitbox, fall-death, and camera follow.

mod components;
mod controller;
mod resources;
mod spawn;
mod systems;

pub use components::{
    AttackHitbox, GameOverCountdown, Player, PlayerController, PlayerEvent, PlayerTick,
};
pub use resources::{CameraTuning, PlayerTuning};
pub use spawn::spawn_player;
pub use systems::{follow_step, hitbox_center};

use bevy::prelude::*;

use crate::actor::ActorSet;
use crate::game::GameState;
use crate::player::systems::{
    apply_hitbox_damage, detect_fall_death, drive_player, expire_player_timers, follow_camera,
    tick_game_over_countdown,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<CameraTuning>()
            .add_systems(
                FixedUpdate,
                (
                    expire_player_timers.in_set(ActorSet::Timers),
                    drive_player.in_set(ActorSet::Decide),
                    apply_hitbox_damage.in_set(ActorSet::Resolve),
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (detect_fall_death, tick_game_over_countdown, follow_camera)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
