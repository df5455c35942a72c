//! Game domain: state flow, game-over requests and menu input.

use bevy::prelude::*;

use crate::game::manager::SceneControl;
use crate::game::ui::GameOverButton;
use crate::game::{GameManager, GameOverRequested, GameState, SceneId, SceneServices};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

pub(crate) fn handle_game_over_requests(
    mut requests: MessageReader<GameOverRequested>,
    manager: Option<ResMut<GameManager>>,
    mut scene: SceneControl,
) {
    if requests.read().count() == 0 {
        return;
    }

    match manager {
        Some(mut manager) => {
            manager.game_over(&mut scene);
        }
        None => {
            warn!("No game manager; reloading the level instead");
            scene.load_scene(SceneId::CurrentLevel);
        }
    }
}

pub(crate) fn handle_game_over_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<(&Interaction, &GameOverButton), Changed<Interaction>>,
    mut manager: ResMut<GameManager>,
    mut scene: SceneControl,
) {
    if !manager.is_game_over() {
        return;
    }

    let pressed = |which: GameOverButton| {
        button_query
            .iter()
            .any(|(interaction, button)| *interaction == Interaction::Pressed && *button == which)
    };

    if keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || pressed(GameOverButton::Restart)
    {
        manager.restart(&mut scene);
    } else if keyboard.just_pressed(KeyCode::KeyM) || pressed(GameOverButton::MainMenu) {
        manager.main_menu(&mut scene);
    }
}

pub(crate) fn handle_main_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        next_state.set(GameState::Loading);
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn force_game_over(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut manager: ResMut<GameManager>,
    mut scene: SceneControl,
) {
    if keyboard.just_pressed(KeyCode::KeyG) && manager.game_over(&mut scene) {
        debug!("Game over forced from keyboard");
    }
}
