//! Animation domain: enemy state-to-parameter adapter.

use bevy::prelude::*;

use crate::actor::AnimatorSink;
use crate::animation::param;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyAnimFrame {
    pub speed: f32,
    pub attacking: bool,
    pub dead: bool,
    pub grounded: bool,
}

/// Maps enemy state onto animator parameters. Stateless.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct EnemyAnimator;

impl EnemyAnimator {
    pub fn update_state<A: AnimatorSink + ?Sized>(&self, sink: &mut A, frame: &EnemyAnimFrame) {
        sink.set_float(param::SPEED, frame.speed);
        sink.set_bool(param::IS_ATTACKING, frame.attacking);
        sink.set_bool(param::IS_DEAD, frame.dead);
        sink.set_bool(param::IS_GROUNDED, frame.grounded);
    }

    pub fn trigger_get_hit<A: AnimatorSink + ?Sized>(&self, sink: &mut A) {
        sink.set_trigger(param::GET_HIT);
    }

    pub fn trigger_death<A: AnimatorSink + ?Sized>(&self, sink: &mut A) {
        sink.set_trigger(param::DEATH);
    }
}
