//! Game domain: app state flow, game manager, and the game-over screen.

mod manager;
mod state;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use manager::{GameManager, GameOverRequested, SceneControl, SceneServices};
pub use state::{GamePhase, GameState, SceneId};
pub use ui::{GameOverButton, GameOverScreen, MainMenuUI};

use bevy::prelude::*;

use crate::game::systems::{
    finish_loading, handle_game_over_input, handle_game_over_requests, handle_main_menu_input,
    setup_camera,
};
use crate::game::ui::{despawn_main_menu, spawn_game_over_screen, spawn_main_menu};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameManager>()
            .add_message::<GameOverRequested>()
            .add_systems(Startup, (setup_camera, spawn_game_over_screen))
            .add_systems(OnEnter(GameState::Loading), finish_loading)
            .add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), despawn_main_menu)
            .add_systems(
                Update,
                (
                    handle_game_over_requests,
                    handle_game_over_input,
                    handle_main_menu_input.run_if(in_state(GameState::MainMenu)),
                ),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            systems::force_game_over.run_if(in_state(GameState::Playing)),
        );
    }
}
