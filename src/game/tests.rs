//! Game domain: game manager transitions.

use super::{GameManager, GamePhase, SceneId, SceneServices};

#[derive(Debug, Default)]
struct RecordingScene {
    time_scale: Option<f32>,
    screen_visible: Option<bool>,
    loads: Vec<SceneId>,
    calls: usize,
}

impl SceneServices for RecordingScene {
    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = Some(scale);
        self.calls += 1;
    }

    fn load_scene(&mut self, scene: SceneId) {
        self.loads.push(scene);
        self.calls += 1;
    }

    fn set_game_over_screen(&mut self, visible: bool) {
        self.screen_visible = Some(visible);
        self.calls += 1;
    }
}

#[test]
fn test_game_over_freezes_time_and_shows_screen() {
    let mut manager = GameManager::default();
    let mut scene = RecordingScene::default();

    assert_eq!(manager.phase(), GamePhase::Running);
    assert!(manager.game_over(&mut scene));

    assert!(manager.is_game_over());
    assert_eq!(scene.time_scale, Some(0.0));
    assert_eq!(scene.screen_visible, Some(true));
    assert!(scene.loads.is_empty());
}

#[test]
fn test_game_over_is_idempotent() {
    let mut manager = GameManager::default();
    let mut scene = RecordingScene::default();

    manager.game_over(&mut scene);
    let calls = scene.calls;

    assert!(!manager.game_over(&mut scene));
    assert_eq!(scene.calls, calls);
    assert_eq!(manager.phase(), GamePhase::GameOver);
}

#[test]
fn test_restart_resumes_and_reloads_level() {
    let mut manager = GameManager::default();
    let mut scene = RecordingScene::default();

    manager.game_over(&mut scene);
    manager.restart(&mut scene);

    assert_eq!(manager.phase(), GamePhase::Running);
    assert_eq!(scene.time_scale, Some(1.0));
    assert_eq!(scene.screen_visible, Some(false));
    assert_eq!(scene.loads, vec![SceneId::CurrentLevel]);

    // A fresh run can end again
    assert!(manager.game_over(&mut scene));
}

#[test]
fn test_main_menu_resumes_and_loads_menu() {
    let mut manager = GameManager::default();
    let mut scene = RecordingScene::default();

    manager.game_over(&mut scene);
    manager.main_menu(&mut scene);

    assert!(!manager.is_game_over());
    assert_eq!(scene.time_scale, Some(1.0));
    assert_eq!(scene.screen_visible, Some(false));
    assert_eq!(scene.loads, vec![SceneId::MainMenu]);
}
