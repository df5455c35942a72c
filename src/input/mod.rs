//! Input domain: intent buffer, producers, and the per-tick reset.

mod resources;
mod systems;
#[cfg(test)]
mod tests;
mod touch;

pub use resources::GameInput;
pub use systems::apply_touch;
pub use touch::{TouchButton, TouchControlsUI};

use bevy::prelude::*;

use crate::actor::ActorSet;
use crate::game::GameState;
use crate::input::systems::{
    clear_input, consume_input_intents, handle_touch_buttons, read_keyboard_input,
};
use crate::input::touch::spawn_touch_controls;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameInput>()
            .add_systems(Startup, spawn_touch_controls)
            .add_systems(Update, (read_keyboard_input, handle_touch_buttons))
            .add_systems(OnEnter(GameState::Playing), clear_input)
            .add_systems(
                FixedUpdate,
                consume_input_intents.in_set(ActorSet::ConsumeInput),
            );
    }
}
