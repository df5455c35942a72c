//! Actor domain: physics layers and avian2d-backed capability implementations.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::{ActorBody, GroundProbe};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
}

/// Rigid body view over one entity's transform and velocity.
///
/// Freezing goes through `RigidBodyDisabled`, which is applied when the
/// command buffer flushes.
pub struct AvianBody<'a, 'w, 's> {
    entity: Entity,
    transform: &'a Transform,
    velocity: &'a mut LinearVelocity,
    commands: &'a mut Commands<'w, 's>,
}

impl<'a, 'w, 's> AvianBody<'a, 'w, 's> {
    pub fn new(
        entity: Entity,
        transform: &'a Transform,
        velocity: &'a mut LinearVelocity,
        commands: &'a mut Commands<'w, 's>,
    ) -> Self {
        Self {
            entity,
            transform,
            velocity,
            commands,
        }
    }
}

impl ActorBody for AvianBody<'_, '_, '_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_simulated(&mut self, simulated: bool) {
        if simulated {
            self.commands
                .entity(self.entity)
                .remove::<RigidBodyDisabled>();
        } else {
            self.velocity.0 = Vec2::ZERO;
            self.commands.entity(self.entity).insert(RigidBodyDisabled);
        }
    }
}

/// Circle overlap against a single physics layer.
pub struct SpatialGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialGroundProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, layer: GameLayer) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(layer),
        }
    }
}

impl GroundProbe for SpatialGroundProbe<'_, '_, '_> {
    fn overlap_circle(&self, center: Vec2, radius: f32) -> bool {
        !self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), center, 0.0, &self.filter)
            .is_empty()
    }
}
