//! Animation state machine and playback.
//!
//! Resolves animator parameters into a clip state, advances clip frames,
//! and tints the placeholder sprites to make the current clip visible.

use bevy::prelude::*;

use crate::animation::{AnimatorParameters, param};

/// Clip states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
    Dash,
    Attack,
    Hit,
    Death,
}

impl AnimationState {
    pub fn looping(self) -> bool {
        matches!(
            self,
            AnimationState::Idle | AnimationState::Walk | AnimationState::Run | AnimationState::Fall
        )
    }

    /// One-shot clips hold until their last frame even if parameters move on.
    pub fn holds_until_finished(self) -> bool {
        matches!(
            self,
            AnimationState::Attack | AnimationState::Hit | AnimationState::Dash
        )
    }

    fn frame_count(self) -> u32 {
        match self {
            AnimationState::Idle => 4,
            AnimationState::Walk => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
            AnimationState::Dash => 2,
            AnimationState::Attack => 3,
            AnimationState::Hit => 2,
            AnimationState::Death => 4,
        }
    }

    fn frame_duration(self) -> f32 {
        match self {
            AnimationState::Attack | AnimationState::Dash => 0.08,
            AnimationState::Hit => 0.1,
            _ => 0.15,
        }
    }
}

/// Component for clip playback on a character sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: AnimationState,
    pub previous_state: AnimationState,
    pub current_frame: u32,
    pub total_frames: u32,
    pub frame_timer: f32,
    pub frame_duration: f32,
    pub looping: bool,
    pub finished: bool,
    /// Sprite colour when no clip-specific tint applies.
    pub base_color: Color,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(Color::srgb(0.9, 0.9, 0.9))
    }
}

impl AnimationController {
    pub fn new(base_color: Color) -> Self {
        let state = AnimationState::Idle;
        Self {
            state,
            previous_state: state,
            current_frame: 0,
            total_frames: state.frame_count(),
            frame_timer: 0.0,
            frame_duration: state.frame_duration(),
            looping: state.looping(),
            finished: false,
            base_color,
        }
    }

    /// Set the clip state, restarting playback if it changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }
        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.looping = state.looping();
        self.total_frames = state.frame_count();
        self.frame_duration = state.frame_duration();
    }

    /// Advance playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;
            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    return;
                }
            }
        }
    }

    pub fn tint(&self) -> Color {
        match self.state {
            AnimationState::Hit => Color::srgb(1.0, 0.35, 0.35),
            AnimationState::Death => Color::srgb(0.25, 0.25, 0.25),
            AnimationState::Dash => Color::srgb(0.7, 0.9, 1.0),
            AnimationState::Attack => Color::srgb(1.0, 0.8, 0.4),
            _ => self.base_color,
        }
    }
}

/// Pick the next clip, consuming whichever trigger wins.
///
/// Death is terminal. Triggers beat held one-shots, which beat locomotion.
pub fn resolve_state(
    params: &mut AnimatorParameters,
    controller: &AnimationController,
) -> AnimationState {
    if controller.state == AnimationState::Death {
        return AnimationState::Death;
    }

    if params.take_trigger(param::DEATH)
        || params.take_trigger(param::FALL_DEATH)
        || params.bool(param::IS_DEAD)
    {
        return AnimationState::Death;
    }
    if params.take_trigger(param::GET_HIT) {
        return AnimationState::Hit;
    }
    if params.take_trigger(param::ATTACK) {
        return AnimationState::Attack;
    }
    if params.take_trigger(param::DASH) {
        return AnimationState::Dash;
    }
    if params.take_trigger(param::JUMP) {
        return AnimationState::Jump;
    }

    if controller.state.holds_until_finished() && !controller.finished {
        return controller.state;
    }

    locomotion_state(params)
}

fn locomotion_state(params: &AnimatorParameters) -> AnimationState {
    if params.bool(param::IS_ATTACKING) {
        return AnimationState::Attack;
    }
    if params.bool(param::IS_DASHING) {
        return AnimationState::Dash;
    }
    if !params.bool_or(param::IS_GROUNDED, true) {
        return if params.bool(param::IS_FALLING) {
            AnimationState::Fall
        } else {
            AnimationState::Jump
        };
    }
    if params.float(param::SPEED) > 0.1 {
        if params.bool(param::IS_RUNNING) {
            AnimationState::Run
        } else {
            AnimationState::Walk
        }
    } else {
        AnimationState::Idle
    }
}

pub(crate) fn resolve_animation_states(
    mut query: Query<(&mut AnimatorParameters, &mut AnimationController)>,
) {
    for (mut params, mut controller) in &mut query {
        let next = resolve_state(&mut params, &controller);
        if next != controller.state {
            debug!("Clip {:?} -> {:?}", controller.state, next);
            controller.set_state(next);
        }
    }
}

pub(crate) fn update_animation_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    let dt = time.delta_secs();
    for mut controller in &mut query {
        controller.advance(dt);
    }
}

pub(crate) fn apply_clip_tint(mut query: Query<(&AnimationController, &mut Sprite)>) {
    for (controller, mut sprite) in &mut query {
        sprite.color = controller.tint();
    }
}
