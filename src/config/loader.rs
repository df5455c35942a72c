//! Loader for the RON tuning file.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::audio::AudioConfig;
use crate::enemy::EnemyTuning;
use crate::level::LevelDef;
use crate::player::{CameraTuning, PlayerTuning};

/// Error type for config loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// World-level physics settings.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self { gravity: 940.0 }
    }
}

/// Every tunable in one record. Omitted sections and fields keep defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub camera: CameraTuning,
    pub world: WorldTuning,
    pub audio: AudioConfig,
    pub level: LevelDef,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_game_config(file: &str, contents: &str) -> Result<GameConfig, ConfigError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ConfigError::Parse {
            file: file.to_string(),
            source,
        })
}

pub fn load_game_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: file.clone(),
        source,
    })?;
    parse_game_config(&file, &contents)
}
