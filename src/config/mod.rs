//! Config domain: tuning file loading and resource installation.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{ConfigError, GameConfig, WorldTuning, load_game_config, parse_game_config};

use avian2d::prelude::Gravity;
use bevy::prelude::*;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.ron";

/// Loads the tuning file while the app is being built, so every later
/// plugin and the first state transition already see the final values.
pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_game_config(&self.path) {
            Ok(config) => {
                info!("Loaded game config from {}", self.path.display());
                config
            }
            Err(e) => {
                warn!("{e}; falling back to default tuning");
                GameConfig::default()
            }
        };

        app.insert_resource(Gravity(Vec2::NEG_Y * config.world.gravity))
            .insert_resource(config.player)
            .insert_resource(config.enemy)
            .insert_resource(config.camera)
            .insert_resource(config.world)
            .insert_resource(config.audio)
            .insert_resource(config.level);
    }
}
