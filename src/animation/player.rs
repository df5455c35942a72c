//! Animation domain: player state-to-parameter adapter.

use bevy::prelude::*;

use crate::actor::AnimatorSink;
use crate::animation::param;

/// Continuous player state written every simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerAnimFrame {
    pub speed: f32,
    pub grounded: bool,
    pub dashing: bool,
    pub attacking: bool,
    pub vertical_speed: f32,
    pub running: bool,
}

/// Maps player state onto animator parameters.
///
/// Holds a jump latch: between a jump trigger and the next observed landing
/// the ground flag is not forwarded, so a one-tick ground contact during
/// take-off cannot snap the jump clip back to idle.
#[derive(Component, Debug, Default)]
pub struct PlayerAnimator {
    jumping: bool,
}

impl PlayerAnimator {
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn update_state<A: AnimatorSink + ?Sized>(&mut self, sink: &mut A, frame: &PlayerAnimFrame) {
        sink.set_float(param::SPEED, frame.speed);
        sink.set_float(param::VERTICAL_SPEED, frame.vertical_speed);
        sink.set_bool(param::IS_DASHING, frame.dashing);
        sink.set_bool(param::IS_ATTACKING, frame.attacking);
        sink.set_bool(param::IS_RUNNING, frame.running);

        if !self.jumping {
            sink.set_bool(param::IS_GROUNDED, frame.grounded);
        } else if frame.grounded {
            // Landing: latch clears first, then ground is confirmed, then the
            // stale jump trigger goes.
            self.jumping = false;
            sink.set_bool(param::IS_GROUNDED, true);
            sink.reset_trigger(param::JUMP);
        }

        sink.set_bool(param::IS_FALLING, !frame.grounded && !self.jumping);
    }

    /// Ignored while a jump is already in flight.
    pub fn trigger_jump<A: AnimatorSink + ?Sized>(&mut self, sink: &mut A) {
        if self.jumping {
            return;
        }
        self.jumping = true;
        sink.set_bool(param::IS_GROUNDED, false);
        sink.set_bool(param::IS_FALLING, false);
        sink.set_trigger(param::JUMP);
    }

    pub fn trigger_dash<A: AnimatorSink + ?Sized>(&mut self, sink: &mut A) {
        sink.set_trigger(param::DASH);
    }

    pub fn trigger_attack<A: AnimatorSink + ?Sized>(&mut self, sink: &mut A) {
        sink.set_trigger(param::ATTACK);
    }

    pub fn trigger_fall_death<A: AnimatorSink + ?Sized>(&mut self, sink: &mut A) {
        sink.set_trigger(param::FALL_DEATH);
    }
}
