//! Game domain: the run/game-over switch and its engine services.

use bevy::ecs::message::Message;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::game::ui::GameOverScreen;
use crate::game::{GamePhase, GameState, SceneId};

/// Engine services the game manager drives.
pub trait SceneServices {
    /// 0 freezes simulated time, 1 is normal speed.
    fn set_time_scale(&mut self, scale: f32);
    fn load_scene(&mut self, scene: SceneId);
    fn set_game_over_screen(&mut self, visible: bool);
}

/// Asks the game manager to end the run.
#[derive(Debug, Clone, Copy)]
pub struct GameOverRequested;

impl Message for GameOverRequested {}

#[derive(Resource, Debug, Default)]
pub struct GameManager {
    phase: GamePhase,
}

impl GameManager {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Freezes time and shows the game-over screen. Returns false, doing
    /// nothing, if the game is already over.
    pub fn game_over(&mut self, scene: &mut impl SceneServices) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = GamePhase::GameOver;
        scene.set_time_scale(0.0);
        scene.set_game_over_screen(true);
        info!("Game over");
        true
    }

    pub fn restart(&mut self, scene: &mut impl SceneServices) {
        self.resume(scene);
        info!("Restarting level");
        scene.load_scene(SceneId::CurrentLevel);
    }

    pub fn main_menu(&mut self, scene: &mut impl SceneServices) {
        self.resume(scene);
        info!("Returning to main menu");
        scene.load_scene(SceneId::MainMenu);
    }

    fn resume(&mut self, scene: &mut impl SceneServices) {
        scene.set_time_scale(1.0);
        scene.set_game_over_screen(false);
        self.phase = GamePhase::Running;
    }
}

/// [`SceneServices`] over virtual time, the app state and the game-over
/// screen's visibility.
#[derive(SystemParam)]
pub struct SceneControl<'w, 's> {
    time: ResMut<'w, Time<Virtual>>,
    next_state: ResMut<'w, NextState<GameState>>,
    screens: Query<'w, 's, &'static mut Visibility, With<GameOverScreen>>,
}

impl SceneServices for SceneControl<'_, '_> {
    fn set_time_scale(&mut self, scale: f32) {
        if scale <= 0.0 {
            self.time.pause();
        } else {
            self.time.set_relative_speed(scale);
            self.time.unpause();
        }
    }

    fn load_scene(&mut self, scene: SceneId) {
        match scene {
            SceneId::CurrentLevel => self.next_state.set(GameState::Loading),
            SceneId::MainMenu => self.next_state.set(GameState::MainMenu),
        }
    }

    fn set_game_over_screen(&mut self, visible: bool) {
        let visibility = if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        for mut screen in &mut self.screens {
            *screen = visibility;
        }
    }
}
