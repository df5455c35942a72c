//! Actor domain: capability seams shared by the player and enemy behaviours.

mod capabilities;
mod physics;
#[cfg(test)]
pub(crate) mod testing;

pub use capabilities::{ActorBody, AnimatorSink, GroundProbe, SoundSink};
pub use physics::{AvianBody, GameLayer, SpatialGroundProbe};

use bevy::prelude::*;

/// Horizontal facing of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Facing that points from `from` toward `to` on the x axis.
    /// Ties resolve to `Left`.
    pub fn toward(from: f32, to: f32) -> Self {
        if to > from { Facing::Right } else { Facing::Left }
    }
}

/// Snapshot of the simulation clock handed to behaviour ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    /// Seconds since the simulation clock started.
    pub now: f32,
    /// Length of the current step.
    pub dt: f32,
}

impl TickClock {
    pub fn new(now: f32, dt: f32) -> Self {
        Self { now, dt }
    }

    pub fn from_time<T: Default>(time: &Time<T>) -> Self {
        Self {
            now: time.elapsed_secs(),
            dt: time.delta_secs(),
        }
    }
}

/// Ordering of the fixed simulation tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorSet {
    /// Timers expire before any decision reads them.
    Timers,
    /// Behaviour decisions: read intents and physics, write velocities.
    Decide,
    /// Consequences of decisions, such as hit detection.
    Resolve,
    /// Damage lands on its targets.
    Apply,
    /// Edge-triggered intents are cleared last.
    ConsumeInput,
}

pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                ActorSet::Timers,
                ActorSet::Decide,
                ActorSet::Resolve,
                ActorSet::Apply,
                ActorSet::ConsumeInput,
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_sign_and_flip() {
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.flipped(), Facing::Left);
        assert_eq!(Facing::Left.flipped().flipped(), Facing::Left);
    }

    #[test]
    fn test_facing_toward() {
        assert_eq!(Facing::toward(0.0, 3.0), Facing::Right);
        assert_eq!(Facing::toward(0.0, -3.0), Facing::Left);
        assert_eq!(Facing::toward(2.0, 2.0), Facing::Left);
    }
}
