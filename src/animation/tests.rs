//! Animation domain: adapter ordering and clip resolution tests.

use super::{
    AnimationController, AnimationState, AnimatorParameters, EnemyAnimFrame, EnemyAnimator,
    PlayerAnimFrame, PlayerAnimator, param, resolve_state,
};
use crate::actor::AnimatorSink;

fn airborne() -> PlayerAnimFrame {
    PlayerAnimFrame {
        grounded: false,
        vertical_speed: 5.0,
        ..Default::default()
    }
}

fn landed() -> PlayerAnimFrame {
    PlayerAnimFrame {
        grounded: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Player adapter
// -----------------------------------------------------------------------------

#[test]
fn test_jump_trigger_suppresses_grounded_until_landing() {
    let mut params = AnimatorParameters::default();
    let mut animator = PlayerAnimator::default();

    animator.update_state(&mut params, &landed());
    assert!(params.bool(param::IS_GROUNDED));

    animator.trigger_jump(&mut params);
    assert!(animator.is_jumping());
    assert!(params.is_trigger_set(param::JUMP));
    assert!(!params.bool(param::IS_GROUNDED));

    // Airborne ticks keep the flag down and do not report falling
    animator.update_state(&mut params, &airborne());
    assert!(!params.bool(param::IS_GROUNDED));
    assert!(!params.bool(param::IS_FALLING));
    assert!(params.is_trigger_set(param::JUMP));

    // Landing clears the latch, confirms ground, then drops the trigger
    animator.update_state(&mut params, &landed());
    assert!(!animator.is_jumping());
    assert!(params.bool(param::IS_GROUNDED));
    assert!(!params.is_trigger_set(param::JUMP));
    assert!(!params.bool(param::IS_FALLING));
}

#[test]
fn test_walking_off_a_ledge_reports_falling() {
    let mut params = AnimatorParameters::default();
    let mut animator = PlayerAnimator::default();

    animator.update_state(&mut params, &airborne());
    assert!(!params.bool(param::IS_GROUNDED));
    assert!(params.bool(param::IS_FALLING));
}

#[test]
fn test_second_jump_trigger_in_flight_is_ignored() {
    let mut params = AnimatorParameters::default();
    let mut animator = PlayerAnimator::default();

    animator.trigger_jump(&mut params);
    assert!(params.take_trigger(param::JUMP));

    animator.trigger_jump(&mut params);
    assert!(!params.is_trigger_set(param::JUMP));
}

#[test]
fn test_player_frame_values_are_forwarded() {
    let mut params = AnimatorParameters::default();
    let mut animator = PlayerAnimator::default();
    let frame = PlayerAnimFrame {
        speed: 4.0,
        grounded: true,
        dashing: true,
        attacking: true,
        vertical_speed: -2.0,
        running: true,
    };

    animator.update_state(&mut params, &frame);

    assert_eq!(params.float(param::SPEED), 4.0);
    assert_eq!(params.float(param::VERTICAL_SPEED), -2.0);
    assert!(params.bool(param::IS_DASHING));
    assert!(params.bool(param::IS_ATTACKING));
    assert!(params.bool(param::IS_RUNNING));
}

// -----------------------------------------------------------------------------
// Enemy adapter
// -----------------------------------------------------------------------------

#[test]
fn test_enemy_adapter_maps_state_and_triggers() {
    let mut params = AnimatorParameters::default();
    let animator = EnemyAnimator;

    animator.update_state(
        &mut params,
        &EnemyAnimFrame {
            speed: 3.0,
            attacking: false,
            dead: false,
            grounded: true,
        },
    );
    assert_eq!(params.float(param::SPEED), 3.0);
    assert!(params.bool(param::IS_GROUNDED));
    assert!(!params.bool(param::IS_DEAD));

    animator.trigger_get_hit(&mut params);
    animator.trigger_death(&mut params);
    assert!(params.is_trigger_set(param::GET_HIT));
    assert!(params.is_trigger_set(param::DEATH));
}

// -----------------------------------------------------------------------------
// Clip resolution
// -----------------------------------------------------------------------------

#[test]
fn test_locomotion_from_speed_and_running() {
    let mut params = AnimatorParameters::default();
    let controller = AnimationController::default();
    params.set_bool(param::IS_GROUNDED, true);

    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Idle);

    params.set_float(param::SPEED, 5.0);
    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Walk);

    params.set_bool(param::IS_RUNNING, true);
    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Run);
}

#[test]
fn test_triggers_are_consumed_once() {
    let mut params = AnimatorParameters::default();
    let mut controller = AnimationController::default();
    params.set_bool(param::IS_GROUNDED, true);
    params.set_trigger(param::ATTACK);

    let state = resolve_state(&mut params, &controller);
    assert_eq!(state, AnimationState::Attack);
    assert!(!params.is_trigger_set(param::ATTACK));

    controller.set_state(state);
    // Still mid-clip: held even without the trigger
    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Attack);

    controller.advance(10.0);
    assert!(controller.finished);
    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Idle);
}

#[test]
fn test_death_is_terminal() {
    let mut params = AnimatorParameters::default();
    let mut controller = AnimationController::default();
    params.set_trigger(param::FALL_DEATH);

    let state = resolve_state(&mut params, &controller);
    assert_eq!(state, AnimationState::Death);
    controller.set_state(state);

    params.set_trigger(param::JUMP);
    params.set_bool(param::IS_GROUNDED, true);
    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Death);
}

#[test]
fn test_airborne_without_latch_is_fall() {
    let mut params = AnimatorParameters::default();
    let controller = AnimationController::default();
    params.set_bool(param::IS_GROUNDED, false);

    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Jump);

    params.set_bool(param::IS_FALLING, true);
    assert_eq!(resolve_state(&mut params, &controller), AnimationState::Fall);
}

#[test]
fn test_looping_clip_wraps() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Walk);
    let frames = controller.total_frames;
    controller.advance(controller.frame_duration * frames as f32 + 0.01);
    assert_eq!(controller.current_frame, 0);
    assert!(!controller.finished);
}
