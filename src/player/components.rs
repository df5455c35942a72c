//! Player domain: components and per-tick outputs.

use bevy::prelude::*;

use crate::actor::Facing;
use crate::animation::PlayerAnimFrame;

#[derive(Component, Debug)]
pub struct Player;

/// Player behaviour state. All timestamps are simulation-clock seconds;
/// `None` means the action has never happened.
#[derive(Component, Debug, Default, Clone)]
pub struct PlayerController {
    pub grounded: bool,
    pub facing: Facing,
    pub jump_count: u32,
    pub last_grounded_at: Option<f32>,
    /// Set by any jump; the coyote window only covers leaving ground unjumped.
    pub coyote_spent: bool,
    pub running: bool,
    pub dashing: bool,
    pub attacking: bool,
    /// Terminal once set.
    pub falling_to_death: bool,
    pub(crate) held_direction: Option<Facing>,
    pub(crate) last_left_tap: Option<f32>,
    pub(crate) last_right_tap: Option<f32>,
    pub(crate) dash_started_at: Option<f32>,
    pub(crate) last_dash_at: Option<f32>,
    pub(crate) attack_started_at: Option<f32>,
}

/// Discrete things that happened during a player tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Jumped,
    Dashed,
    DashEnded,
    AttackStarted,
    AttackEnded,
}

/// Result of one simulation tick for a live player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTick {
    pub events: Vec<PlayerEvent>,
    pub animation: PlayerAnimFrame,
}

/// Attack region in front of the player; enemies inside take damage once
/// per activation.
#[derive(Component, Debug, Default)]
pub struct AttackHitbox {
    pub active: bool,
    pub struck: Vec<Entity>,
}

impl AttackHitbox {
    pub fn activate(&mut self) {
        self.active = true;
        self.struck.clear();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Records `target` and returns true the first time it is struck in
    /// this activation.
    pub fn strike(&mut self, target: Entity) -> bool {
        if !self.active || self.struck.contains(&target) {
            return false;
        }
        self.struck.push(target);
        true
    }
}

/// Pending game over after a fall-death. Lives on the player entity, so it
/// is dropped with the level.
#[derive(Component, Debug)]
pub struct GameOverCountdown(pub Timer);

impl GameOverCountdown {
    pub fn new(delay: f32) -> Self {
        Self(Timer::from_seconds(delay, TimerMode::Once))
    }
}
