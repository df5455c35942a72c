//! Animation domain: the animator parameter store.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::actor::AnimatorSink;

/// Parameter names shared by the adapters and the clip resolver.
pub mod param {
    pub const SPEED: &str = "Speed";
    pub const VERTICAL_SPEED: &str = "VerticalSpeed";
    pub const IS_GROUNDED: &str = "IsGrounded";
    pub const IS_FALLING: &str = "IsFalling";
    pub const IS_DASHING: &str = "IsDashing";
    pub const IS_ATTACKING: &str = "IsAttacking";
    pub const IS_RUNNING: &str = "IsRunning";
    pub const IS_DEAD: &str = "IsDead";

    pub const JUMP: &str = "Jump";
    pub const DASH: &str = "Dash";
    pub const ATTACK: &str = "Attack";
    pub const FALL_DEATH: &str = "FallDeath";
    pub const GET_HIT: &str = "GetHit";
    pub const DEATH: &str = "Death";
}

/// Named float/bool parameters plus pending triggers.
///
/// Triggers stay set until the clip resolver consumes them or an adapter
/// resets them.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParameters {
    floats: HashMap<&'static str, f32>,
    bools: HashMap<&'static str, bool>,
    triggers: HashSet<&'static str>,
}

impl AnimatorParameters {
    /// Unwritten floats read as zero.
    pub fn float(&self, name: &str) -> f32 {
        self.floats.get(name).copied().unwrap_or(0.0)
    }

    /// Unwritten bools read as false.
    pub fn bool(&self, name: &str) -> bool {
        self.bool_or(name, false)
    }

    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.bools.get(name).copied().unwrap_or(default)
    }

    pub fn is_trigger_set(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    /// Consume a trigger, returning whether it was set.
    pub fn take_trigger(&mut self, name: &str) -> bool {
        self.triggers.remove(name)
    }
}

impl AnimatorSink for AnimatorParameters {
    fn set_float(&mut self, name: &'static str, value: f32) {
        self.floats.insert(name, value);
    }

    fn set_bool(&mut self, name: &'static str, value: bool) {
        self.bools.insert(name, value);
    }

    fn set_trigger(&mut self, name: &'static str) {
        self.triggers.insert(name);
    }

    fn reset_trigger(&mut self, name: &'static str) {
        self.triggers.remove(name);
    }
}
