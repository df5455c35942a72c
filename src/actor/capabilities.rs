//! Actor domain: capability traits binding behaviour logic to engine services.
//!
//! Behaviour code never touches ECS queries directly. Each tick it is handed
//! implementations of these traits, backed by avian2d and Bevy components in
//! the game and by in-memory doubles in tests.

use bevy::prelude::*;

use crate::audio::SoundCue;

/// The rigid body an actor drives.
pub trait ActorBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Enables or freezes physics simulation for the body.
    fn set_simulated(&mut self, simulated: bool);
}

/// Physics-world overlap query with the layer mask already bound.
pub trait GroundProbe {
    fn overlap_circle(&self, center: Vec2, radius: f32) -> bool;
}

/// Animation parameter writes.
pub trait AnimatorSink {
    fn set_float(&mut self, name: &'static str, value: f32);
    fn set_bool(&mut self, name: &'static str, value: bool);
    fn set_trigger(&mut self, name: &'static str);
    fn reset_trigger(&mut self, name: &'static str);
}

/// Fire-and-forget sound playback.
pub trait SoundSink {
    fn play_one_shot(&mut self, cue: SoundCue);
}
