//! Player domain: the movement/action state machine.
//!
//! One call to [`PlayerController::fixed_tick`] per simulation step: ground
//! check, horizontal movement, then actions (jump, dash, attack). Duration
//! timers expire separately in [`PlayerController::expire_timers`], which
//! runs earlier in the same step.

use bevy::prelude::*;

use crate::actor::{ActorBody, Facing, GroundProbe, TickClock};
use crate::animation::PlayerAnimFrame;
use crate::input::GameInput;
use crate::player::{PlayerController, PlayerEvent, PlayerTick, PlayerTuning};

impl PlayerController {
    /// Advance one simulation step. Returns `None` once the player has
    /// fallen to death; a dead player reads no input and writes nothing.
    pub fn fixed_tick(
        &mut self,
        input: &GameInput,
        body: &mut impl ActorBody,
        ground: &impl GroundProbe,
        tuning: &PlayerTuning,
        clock: TickClock,
    ) -> Option<PlayerTick> {
        if self.falling_to_death {
            return None;
        }

        self.check_ground(body, ground, tuning, clock.now);
        self.apply_movement(input, body, tuning, clock.now);

        let mut events = Vec::new();
        self.handle_actions(input, body, tuning, clock, &mut events);

        Some(PlayerTick {
            events,
            animation: self.animation_frame(body.velocity()),
        })
    }

    /// End dash and attack windows whose duration has elapsed.
    pub fn expire_timers(&mut self, tuning: &PlayerTuning, now: f32) -> Vec<PlayerEvent> {
        let mut events = Vec::new();

        if self.dashing
            && self
                .dash_started_at
                .is_some_and(|t| now - t >= tuning.dash_duration)
        {
            self.dashing = false;
            events.push(PlayerEvent::DashEnded);
        }

        if self.attacking
            && self
                .attack_started_at
                .is_some_and(|t| now - t >= tuning.attack_duration)
        {
            self.attacking = false;
            events.push(PlayerEvent::AttackEnded);
        }

        events
    }

    /// Returns true exactly once: on the first call with `y` below the
    /// fall threshold.
    pub fn check_fall(&mut self, y: f32, tuning: &PlayerTuning) -> bool {
        if self.falling_to_death || y >= tuning.fall_threshold_y {
            return false;
        }
        self.falling_to_death = true;
        true
    }

    pub fn animation_frame(&self, velocity: Vec2) -> PlayerAnimFrame {
        PlayerAnimFrame {
            speed: velocity.x.abs(),
            grounded: self.grounded,
            dashing: self.dashing,
            attacking: self.attacking,
            vertical_speed: velocity.y,
            running: self.running,
        }
    }

    pub fn can_jump(&self, tuning: &PlayerTuning, now: f32) -> bool {
        let in_coyote_window = !self.coyote_spent
            && self
                .last_grounded_at
                .is_some_and(|t| now - t <= tuning.coyote_time);
        self.grounded || in_coyote_window || self.jump_count < tuning.max_jump_count
    }

    pub fn can_dash(&self, tuning: &PlayerTuning, now: f32) -> bool {
        !self.dashing
            && self
                .last_dash_at
                .is_none_or(|t| now - t >= tuning.dash_cooldown)
    }

    fn check_ground(
        &mut self,
        body: &impl ActorBody,
        ground: &impl GroundProbe,
        tuning: &PlayerTuning,
        now: f32,
    ) {
        let was_grounded = self.grounded;
        let foot = body.position() - Vec2::new(0.0, tuning.ground_check_offset);

        // A near-zero vertical speed also counts: contact can drop out for a
        // frame at platform seams.
        self.grounded = ground.overlap_circle(foot, tuning.ground_radius)
            || body.velocity().y.abs() < tuning.grounded_velocity_epsilon;

        if self.grounded {
            self.last_grounded_at = Some(now);
            self.jump_count = 0;
            self.coyote_spent = false;
        }

        if self.grounded != was_grounded {
            debug!(
                "Player grounded={} jump_count={}",
                self.grounded, self.jump_count
            );
        }
    }

    fn apply_movement(
        &mut self,
        input: &GameInput,
        body: &mut impl ActorBody,
        tuning: &PlayerTuning,
        now: f32,
    ) {
        if self.dashing {
            return;
        }

        let direction = input.horizontal();
        match direction {
            Some(dir) if self.held_direction != Some(dir) => self.register_tap(dir, tuning, now),
            Some(_) => {}
            None => self.running = false,
        }
        self.held_direction = direction;

        let speed = if self.running {
            tuning.run_speed
        } else {
            tuning.walk_speed
        };
        let axis = direction.map_or(0.0, Facing::sign);
        body.set_velocity(Vec2::new(axis * speed, body.velocity().y));

        if let Some(dir) = direction {
            self.facing = dir;
        }
    }

    /// A fresh press of `dir`: running starts if the previous press of the
    /// same direction was inside the double-tap window.
    fn register_tap(&mut self, dir: Facing, tuning: &PlayerTuning, now: f32) {
        let last_tap = match dir {
            Facing::Left => &mut self.last_left_tap,
            Facing::Right => &mut self.last_right_tap,
        };
        self.running = last_tap.is_some_and(|t| now - t < tuning.double_tap_window);
        *last_tap = Some(now);
        if self.running {
            debug!("Player running {:?}", dir);
        }
    }

    fn handle_actions(
        &mut self,
        input: &GameInput,
        body: &mut impl ActorBody,
        tuning: &PlayerTuning,
        clock: TickClock,
        events: &mut Vec<PlayerEvent>,
    ) {
        if input.jump_pressed() && self.can_jump(tuning, clock.now) {
            body.set_velocity(Vec2::new(body.velocity().x, tuning.jump_force));
            self.jump_count += 1;
            self.grounded = false;
            self.coyote_spent = true;
            events.push(PlayerEvent::Jumped);
            debug!("Player jump {}/{}", self.jump_count, tuning.max_jump_count);
        }

        if input.dash_pressed() && self.can_dash(tuning, clock.now) {
            self.dashing = true;
            self.dash_started_at = Some(clock.now);
            self.last_dash_at = Some(clock.now);
            let speed = tuning.dash_force * clock.dt;
            body.set_velocity(Vec2::new(self.facing.sign() * speed, 0.0));
            events.push(PlayerEvent::Dashed);
            debug!("Player dash {:?} at {}", self.facing, speed);
        }

        if input.attack_pressed() && !self.attacking {
            self.attacking = true;
            self.attack_started_at = Some(clock.now);
            events.push(PlayerEvent::AttackStarted);
        }
    }
}
