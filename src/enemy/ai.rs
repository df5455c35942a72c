//! Enemy domain: patrol, chase and attack decisions.

use bevy::prelude::*;

use crate::actor::{ActorBody, Facing, GroundProbe};
use crate::animation::EnemyAnimFrame;
use crate::enemy::{DamageOutcome, EnemyBrain, EnemyTuning};

impl EnemyBrain {
    /// Advance one simulation step toward an optional `target` position.
    ///
    /// Dead enemies return `None`. An enemy mid-attack makes no decisions
    /// but still reports its animation frame.
    pub fn fixed_tick(
        &mut self,
        body: &mut impl ActorBody,
        ground: &impl GroundProbe,
        target: Option<Vec2>,
        tuning: &EnemyTuning,
        now: f32,
    ) -> Option<EnemyAnimFrame> {
        if self.dead {
            return None;
        }

        let foot = body.position() - Vec2::new(0.0, tuning.ground_check_offset);
        self.grounded = ground.overlap_circle(foot, tuning.ground_radius);

        if self.attacking
            && self
                .last_attack_at
                .is_some_and(|t| now - t >= tuning.attack_duration)
        {
            self.attacking = false;
        }

        if !self.attacking {
            self.decide(body, target, tuning, now);
        }

        Some(self.animation_frame(body.velocity()))
    }

    pub fn animation_frame(&self, velocity: Vec2) -> EnemyAnimFrame {
        EnemyAnimFrame {
            speed: velocity.x.abs(),
            attacking: self.attacking,
            dead: self.dead,
            grounded: self.grounded,
        }
    }

    /// Apply a hit. Killing blows freeze the body; other hits knock the
    /// enemy back against its walk direction.
    pub fn take_damage(
        &mut self,
        amount: i32,
        body: &mut impl ActorBody,
        tuning: &EnemyTuning,
    ) -> DamageOutcome {
        if self.dead {
            return DamageOutcome::Ignored;
        }

        self.health -= amount;
        if self.health <= 0 {
            self.dead = true;
            self.attacking = false;
            self.chasing = false;
            body.set_simulated(false);
            return DamageOutcome::Killed;
        }

        let knockback = -self.direction.sign() * tuning.knockback_speed;
        body.set_velocity(Vec2::new(knockback, body.velocity().y));
        DamageOutcome::Hurt
    }

    fn decide(
        &mut self,
        body: &mut impl ActorBody,
        target: Option<Vec2>,
        tuning: &EnemyTuning,
        now: f32,
    ) {
        let position = body.position();
        let target = target.map(|t| (t, position.distance(t)));

        let was_chasing = self.chasing;
        self.chasing = target.is_some_and(|(_, distance)| distance <= tuning.detection_range);
        if self.chasing != was_chasing {
            debug!("Enemy chasing={}", self.chasing);
        }

        match target {
            Some((target, distance)) if self.chasing => {
                self.chase(body, target, distance, tuning, now)
            }
            _ => self.patrol(body, tuning),
        }
    }

    fn patrol(&mut self, body: &mut impl ActorBody, tuning: &EnemyTuning) {
        let x = body.position().x;
        let past_bound = match self.direction {
            Facing::Right => x > self.patrol.max_x(),
            Facing::Left => x < self.patrol.min_x(),
        };
        if past_bound {
            self.direction = self.direction.flipped();
        }

        let vx = self.direction.sign() * tuning.walk_speed;
        body.set_velocity(Vec2::new(vx, body.velocity().y));
    }

    fn chase(
        &mut self,
        body: &mut impl ActorBody,
        target: Vec2,
        distance: f32,
        tuning: &EnemyTuning,
        now: f32,
    ) {
        if distance > tuning.attack_range {
            self.direction = Facing::toward(body.position().x, target.x);
            let vx = self.direction.sign() * tuning.walk_speed;
            body.set_velocity(Vec2::new(vx, body.velocity().y));
            return;
        }

        body.set_velocity(Vec2::ZERO);
        if self
            .last_attack_at
            .is_none_or(|t| now > t + tuning.attack_cooldown)
        {
            self.attacking = true;
            self.last_attack_at = Some(now);
            debug!("Enemy attacks at {:.2}", now);
        }
    }
}
