//! Config domain: tests for tuning file parsing and fallbacks.

use std::path::Path;

use super::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, load_game_config, parse_game_config};
use crate::player::PlayerTuning;

#[test]
fn test_empty_file_is_all_defaults() {
    let config = parse_game_config("inline", "()").expect("empty config parses");
    let defaults = GameConfig::default();
    assert_eq!(config.player.max_jump_count, defaults.player.max_jump_count);
    assert_eq!(config.enemy.max_health, defaults.enemy.max_health);
    assert_eq!(config.level.platforms.len(), defaults.level.platforms.len());
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = parse_game_config(
        "inline",
        "(player: (walk_speed: 100.0, max_jump_count: 3), enemy: (detection_range: 5.0))",
    )
    .expect("partial config parses");

    assert_eq!(config.player.walk_speed, 100.0);
    assert_eq!(config.player.max_jump_count, 3);
    assert_eq!(config.player.run_speed, PlayerTuning::default().run_speed);
    assert_eq!(config.enemy.detection_range, 5.0);
}

#[test]
fn test_audio_paths_use_implicit_some() {
    let config = parse_game_config("inline", r#"(audio: (jump: "audio/jump.ogg"))"#)
        .expect("audio config parses");
    assert_eq!(config.audio.jump.as_deref(), Some("audio/jump.ogg"));
    assert!(config.audio.dash.is_none());
}

#[test]
fn test_level_layout_parses() {
    let config = parse_game_config(
        "inline",
        "(level: (player_spawn: (0.0, 40.0), platforms: [(center: (0.0, -16.0), size: (400.0, 32.0))], enemy_spawns: []))",
    )
    .expect("level parses");
    assert_eq!(config.level.player_spawn, (0.0, 40.0));
    assert_eq!(config.level.platforms.len(), 1);
    assert!(config.level.enemy_spawns.is_empty());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let err = parse_game_config("broken.ron", "(player: (walk_speed: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_game_config(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_shipped_config_keeps_ground_check_clear_after_take_off() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
    let config = load_game_config(&path).expect("shipped config loads");

    // Bevy's default fixed step
    let dt = 1.0 / 64.0;
    let first_step_rise = config.player.jump_force * dt - config.world.gravity * dt * dt;
    assert!(config.player.ground_radius < first_step_rise);
}
