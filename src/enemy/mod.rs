//! Enemy domain: patrol/chase/attack AI, damage, and removal.

mod ai;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;

pub use components::{DamageOutcome, DespawnCountdown, Enemy, EnemyBrain, PatrolBounds};
pub use events::DamageEvent;
pub use resources::EnemyTuning;
pub use spawn::spawn_enemy;

use bevy::prelude::*;

use crate::actor::ActorSet;
use crate::enemy::systems::{apply_damage_events, drive_enemies, tick_despawn_countdowns};
use crate::game::GameState;

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_message::<DamageEvent>()
            .add_systems(
                FixedUpdate,
                (
                    drive_enemies.in_set(ActorSet::Decide),
                    apply_damage_events.in_set(ActorSet::Apply),
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                tick_despawn_countdowns.run_if(in_state(GameState::Playing)),
            );
    }
}
