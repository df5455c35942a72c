//! Input domain: keyboard and touch producers, and the per-tick consumer.

use bevy::prelude::*;

use crate::input::touch::TouchHeld;
use crate::input::{GameInput, TouchButton};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];
const DASH_KEYS: [KeyCode; 3] = [KeyCode::ShiftLeft, KeyCode::ShiftRight, KeyCode::KeyL];
const ATTACK_KEYS: [KeyCode; 2] = [KeyCode::KeyJ, KeyCode::KeyK];

/// Keyboard behaves like the touch buttons: key down sets a movement flag,
/// key up clears it, and action keys press once per key down.
pub(crate) fn read_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<GameInput>,
) {
    if keyboard.any_just_pressed(LEFT_KEYS) {
        input.set_move_left(true);
    } else if keyboard.any_just_released(LEFT_KEYS) && !keyboard.any_pressed(LEFT_KEYS) {
        input.set_move_left(false);
    }

    if keyboard.any_just_pressed(RIGHT_KEYS) {
        input.set_move_right(true);
    } else if keyboard.any_just_released(RIGHT_KEYS) && !keyboard.any_pressed(RIGHT_KEYS) {
        input.set_move_right(false);
    }

    if keyboard.any_just_pressed(JUMP_KEYS) {
        input.press_jump();
    }
    if keyboard.any_just_pressed(DASH_KEYS) {
        input.press_dash();
    }
    if keyboard.any_just_pressed(ATTACK_KEYS) {
        input.press_attack();
    }
}

/// Route one touch button edge into the intent buffer.
pub fn apply_touch(input: &mut GameInput, button: TouchButton, pressed: bool) {
    match button {
        TouchButton::Left => input.set_move_left(pressed),
        TouchButton::Right => input.set_move_right(pressed),
        TouchButton::Jump if pressed => input.press_jump(),
        TouchButton::Dash if pressed => input.press_dash(),
        TouchButton::Attack if pressed => input.press_attack(),
        TouchButton::Jump | TouchButton::Dash | TouchButton::Attack => {}
    }
}

/// Edge produced by an interaction change, given whether the button was
/// already held. Hover changes on an idle button produce nothing.
pub(crate) fn touch_edge(was_held: bool, interaction: Interaction) -> Option<bool> {
    let held = interaction == Interaction::Pressed;
    (held != was_held).then_some(held)
}

pub(crate) fn handle_touch_buttons(
    mut input: ResMut<GameInput>,
    mut buttons: Query<(&Interaction, &TouchButton, &mut TouchHeld), Changed<Interaction>>,
) {
    for (interaction, button, mut held) in &mut buttons {
        let Some(pressed) = touch_edge(held.0, *interaction) else {
            continue;
        };
        held.0 = pressed;
        apply_touch(&mut input, *button, pressed);
        debug!(
            "Touch {:?} {}",
            button,
            if pressed { "down" } else { "up" }
        );
    }
}

/// Runs once per fixed tick after every actor has read the intents.
pub(crate) fn consume_input_intents(mut input: ResMut<GameInput>) {
    input.consume_and_reset();
}

/// Drop stale intents but keep direction keys that are still held.
pub(crate) fn reset_from_keyboard(input: &mut GameInput, keyboard: &ButtonInput<KeyCode>) {
    input.clear();
    input.set_move_left(keyboard.any_pressed(LEFT_KEYS));
    input.set_move_right(keyboard.any_pressed(RIGHT_KEYS));
}

pub(crate) fn clear_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<GameInput>) {
    reset_from_keyboard(&mut input, &keyboard);
}
