//! Enemy domain: components.

use bevy::prelude::*;

use crate::actor::Facing;

#[derive(Component, Debug)]
pub struct Enemy;

/// Horizontal strip an enemy walks while it has no target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolBounds {
    pub start_x: f32,
    pub range: f32,
}

impl PatrolBounds {
    pub fn min_x(&self) -> f32 {
        self.start_x - self.range
    }

    pub fn max_x(&self) -> f32 {
        self.start_x + self.range
    }
}

/// Enemy behaviour state.
#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    pub health: i32,
    /// Walk direction; also the sprite facing.
    pub direction: Facing,
    pub patrol: PatrolBounds,
    pub chasing: bool,
    pub attacking: bool,
    /// Terminal once set.
    pub dead: bool,
    pub grounded: bool,
    pub(crate) last_attack_at: Option<f32>,
}

impl EnemyBrain {
    pub fn new(start_x: f32, max_health: i32, patrol_range: f32) -> Self {
        Self {
            health: max_health,
            direction: Facing::Right,
            patrol: PatrolBounds {
                start_x,
                range: patrol_range,
            },
            chasing: false,
            attacking: false,
            dead: false,
            grounded: false,
            last_attack_at: None,
        }
    }
}

/// What a hit did to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Already dead; nothing changed.
    Ignored,
    Hurt,
    Killed,
}

/// Removal timer for a dead enemy.
#[derive(Component, Debug)]
pub struct DespawnCountdown(pub Timer);

impl DespawnCountdown {
    pub fn new(delay: f32) -> Self {
        Self(Timer::from_seconds(delay, TimerMode::Once))
    }
}
