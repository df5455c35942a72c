//! Input domain: on-screen touch controls.

use bevy::prelude::*;

/// On-screen control that feeds [`crate::input::GameInput`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
    Dash,
    Attack,
}

impl TouchButton {
    fn label(self) -> &'static str {
        match self {
            TouchButton::Left => "<",
            TouchButton::Right => ">",
            TouchButton::Jump => "JUMP",
            TouchButton::Dash => "DASH",
            TouchButton::Attack => "ATK",
        }
    }
}

/// Whether the button's last routed edge was a press.
#[derive(Component, Debug, Default, Clone, Copy)]
pub(crate) struct TouchHeld(pub bool);

/// Marker for the touch control overlay
#[derive(Component)]
pub struct TouchControlsUI;

pub(crate) fn spawn_touch_controls(mut commands: Commands) {
    commands
        .spawn((
            TouchControlsUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                right: Val::Px(16.0),
                bottom: Val::Px(16.0),
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
        ))
        .with_children(|parent| {
            // Directional pad on the left, actions on the right
            for group in [
                &[TouchButton::Left, TouchButton::Right][..],
                &[TouchButton::Jump, TouchButton::Dash, TouchButton::Attack][..],
            ] {
                parent
                    .spawn(Node {
                        column_gap: Val::Px(12.0),
                        ..default()
                    })
                    .with_children(|row| {
                        for &button in group {
                            spawn_button(row, button);
                        }
                    });
            }
        });
}

fn spawn_button(parent: &mut ChildSpawnerCommands, button: TouchButton) {
    parent
        .spawn((
            button,
            TouchHeld::default(),
            Button,
            Node {
                width: Val::Px(72.0),
                height: Val::Px(56.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.15, 0.15, 0.2, 0.6)),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
        ))
        .with_child((
            Text::new(button.label()),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        ));
}
