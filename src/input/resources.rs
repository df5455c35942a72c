//! Input domain: the intent buffer shared by input producers and the simulation.

use bevy::prelude::*;

use crate::actor::Facing;

/// Movement and action intents.
///
/// Movement flags are level-triggered: they stay set while a direction is
/// held. Action flags are edge-triggered: any number of presses between two
/// simulation ticks collapse into one, and [`GameInput::consume_and_reset`]
/// clears them once the tick has read them.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct GameInput {
    move_left: bool,
    move_right: bool,
    jump_pressed: bool,
    dash_pressed: bool,
    attack_pressed: bool,
}

impl GameInput {
    pub fn set_move_left(&mut self, held: bool) {
        self.move_left = held;
    }

    pub fn set_move_right(&mut self, held: bool) {
        self.move_right = held;
    }

    pub fn press_jump(&mut self) {
        self.jump_pressed = true;
    }

    pub fn press_dash(&mut self) {
        self.dash_pressed = true;
    }

    pub fn press_attack(&mut self) {
        self.attack_pressed = true;
    }

    pub fn move_left(&self) -> bool {
        self.move_left
    }

    pub fn move_right(&self) -> bool {
        self.move_right
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn dash_pressed(&self) -> bool {
        self.dash_pressed
    }

    pub fn attack_pressed(&self) -> bool {
        self.attack_pressed
    }

    /// Held horizontal direction. Left wins when both are held.
    pub fn horizontal(&self) -> Option<Facing> {
        if self.move_left {
            Some(Facing::Left)
        } else if self.move_right {
            Some(Facing::Right)
        } else {
            None
        }
    }

    /// Clears the edge-triggered action flags. Movement flags are untouched.
    pub fn consume_and_reset(&mut self) {
        self.jump_pressed = false;
        self.dash_pressed = false;
        self.attack_pressed = false;
    }

    /// Drops every intent, held or pressed.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
