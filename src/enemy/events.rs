//! Enemy domain: damage messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Damage dealt to an enemy by the player's attack.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}
