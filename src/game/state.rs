//! Game domain: app states and scene identifiers.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    MainMenu,
    /// Transient: passes straight through to `Playing`, so a level reload is
    /// always a real exit and re-enter of the play state.
    #[default]
    Loading,
    Playing,
}

/// Whether the current level is live or showing the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

/// Scenes the game can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    CurrentLevel,
    MainMenu,
}
