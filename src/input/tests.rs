//! Input domain: tests for intent buffering and touch routing.

use bevy::prelude::*;

use super::systems::{reset_from_keyboard, touch_edge};
use super::{GameInput, TouchButton, apply_touch};
use crate::actor::Facing;

#[test]
fn test_repeated_presses_collapse_to_one_consumption() {
    let mut input = GameInput::default();
    input.press_jump();
    input.press_jump();
    input.press_jump();
    assert!(input.jump_pressed());

    input.consume_and_reset();
    assert!(!input.jump_pressed());

    // Nothing was pressed since; the next cycle stays clear
    input.consume_and_reset();
    assert!(!input.jump_pressed());
}

#[test]
fn test_consume_clears_every_action_but_keeps_movement() {
    let mut input = GameInput::default();
    input.set_move_right(true);
    input.press_jump();
    input.press_dash();
    input.press_attack();

    input.consume_and_reset();

    assert!(!input.jump_pressed());
    assert!(!input.dash_pressed());
    assert!(!input.attack_pressed());
    assert!(input.move_right());
    assert_eq!(input.horizontal(), Some(Facing::Right));
}

#[test]
fn test_horizontal_prefers_left() {
    let mut input = GameInput::default();
    assert_eq!(input.horizontal(), None);

    input.set_move_right(true);
    input.set_move_left(true);
    assert_eq!(input.horizontal(), Some(Facing::Left));

    input.set_move_left(false);
    assert_eq!(input.horizontal(), Some(Facing::Right));
}

#[test]
fn test_touch_move_buttons_are_level_triggered() {
    let mut input = GameInput::default();
    apply_touch(&mut input, TouchButton::Left, true);
    assert!(input.move_left());
    input.consume_and_reset();
    assert!(input.move_left());

    apply_touch(&mut input, TouchButton::Left, false);
    assert!(!input.move_left());
}

#[test]
fn test_touch_action_release_does_not_press() {
    let mut input = GameInput::default();
    apply_touch(&mut input, TouchButton::Attack, false);
    assert!(!input.attack_pressed());

    apply_touch(&mut input, TouchButton::Attack, true);
    apply_touch(&mut input, TouchButton::Attack, false);
    assert!(input.attack_pressed());
}

#[test]
fn test_clear_drops_held_and_pressed() {
    let mut input = GameInput::default();
    input.set_move_left(true);
    input.press_dash();
    input.clear();
    assert_eq!(input, GameInput::default());
}

#[test]
fn test_hover_on_idle_button_routes_nothing() {
    assert_eq!(touch_edge(false, Interaction::Hovered), None);
    assert_eq!(touch_edge(false, Interaction::None), None);
}

#[test]
fn test_leaving_pressed_routes_one_release() {
    assert_eq!(touch_edge(false, Interaction::Pressed), Some(true));
    assert_eq!(touch_edge(true, Interaction::Hovered), Some(false));
    assert_eq!(touch_edge(true, Interaction::None), Some(false));
    assert_eq!(touch_edge(true, Interaction::Pressed), None);
}

#[test]
fn test_hover_does_not_cancel_keyboard_movement() {
    let mut input = GameInput::default();
    input.set_move_left(true);

    // Finger drifts over an idle Left button: no edge, movement stays
    if let Some(pressed) = touch_edge(false, Interaction::Hovered) {
        apply_touch(&mut input, TouchButton::Left, pressed);
    }
    assert!(input.move_left());
}

#[test]
fn test_reset_keeps_held_direction_keys() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::ArrowLeft);

    let mut input = GameInput::default();
    input.set_move_right(true);
    input.press_jump();
    input.press_dash();
    input.press_attack();

    reset_from_keyboard(&mut input, &keys);
    assert!(input.move_left());
    assert!(!input.move_right());
    assert!(!input.jump_pressed());
    assert!(!input.dash_pressed());
    assert!(!input.attack_pressed());
    assert_eq!(input.horizontal(), Some(Facing::Left));
}
