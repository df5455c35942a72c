//! In-memory capability doubles for behaviour tests.

use bevy::prelude::*;

use crate::actor::{ActorBody, GroundProbe};

/// A body that only stores what it is told; no integration happens.
#[derive(Debug, Clone)]
pub struct TestBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub simulated: bool,
}

impl TestBody {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            simulated: true,
        }
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }
}

impl ActorBody for TestBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn set_simulated(&mut self, simulated: bool) {
        self.simulated = simulated;
    }
}

/// Ground check with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedGround(pub bool);

impl GroundProbe for FixedGround {
    fn overlap_circle(&self, _center: Vec2, _radius: f32) -> bool {
        self.0
    }
}

/// Infinite floor whose top surface is at `top`.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub top: f32,
}

impl GroundProbe for FlatGround {
    fn overlap_circle(&self, center: Vec2, radius: f32) -> bool {
        center.y - radius <= self.top
    }
}

impl TestBody {
    /// One semi-implicit Euler step under `gravity`, resting on `ground` for
    /// a body whose bottom edge sits `half_height` below its centre.
    pub fn integrate(&mut self, gravity: f32, dt: f32, ground: FlatGround, half_height: f32) {
        if !self.simulated {
            return;
        }
        self.velocity.y -= gravity * dt;
        self.position += self.velocity * dt;

        let rest_y = ground.top + half_height;
        if self.position.y < rest_y {
            self.position.y = rest_y;
            self.velocity.y = self.velocity.y.max(0.0);
        }
    }
}
