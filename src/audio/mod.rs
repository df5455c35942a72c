//! Audio domain: sound cues, per-actor queues, and the clip bank.

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use crate::actor::SoundSink;

/// One-shot sounds an actor can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Dash,
    Attack,
    GameOver,
}

/// Clip paths, relative to the asset folder. Unset cues stay silent.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub jump: Option<String>,
    pub dash: Option<String>,
    pub attack: Option<String>,
    pub game_over: Option<String>,
}

impl AudioConfig {
    pub fn path_for(&self, cue: SoundCue) -> Option<&str> {
        match cue {
            SoundCue::Jump => self.jump.as_deref(),
            SoundCue::Dash => self.dash.as_deref(),
            SoundCue::Attack => self.attack.as_deref(),
            SoundCue::GameOver => self.game_over.as_deref(),
        }
    }
}

/// Sounds requested by an actor this frame, drained by [`play_queued_sounds`].
#[derive(Component, Debug, Default)]
pub struct SoundQueue {
    pending: Vec<SoundCue>,
}

impl SoundQueue {
    pub fn drain(&mut self) -> impl Iterator<Item = SoundCue> + '_ {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl SoundSink for SoundQueue {
    fn play_one_shot(&mut self, cue: SoundCue) {
        self.pending.push(cue);
    }
}

/// Loaded clip handles keyed by cue.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    clips: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SoundBank {
    pub fn get(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        self.clips.get(&cue)
    }
}

fn load_sound_bank(
    config: Res<AudioConfig>,
    asset_server: Res<AssetServer>,
    mut bank: ResMut<SoundBank>,
) {
    for cue in [
        SoundCue::Jump,
        SoundCue::Dash,
        SoundCue::Attack,
        SoundCue::GameOver,
    ] {
        match config.path_for(cue) {
            Some(path) => {
                bank.clips.insert(cue, asset_server.load(path.to_string()));
            }
            None => debug!("No clip configured for {:?}", cue),
        }
    }
    info!("Sound bank ready with {} clips", bank.clips.len());
}

pub(crate) fn play_queued_sounds(
    mut commands: Commands,
    bank: Res<SoundBank>,
    mut queues: Query<&mut SoundQueue>,
) {
    for mut queue in &mut queues {
        if queue.is_empty() {
            continue;
        }
        for cue in queue.drain() {
            let Some(handle) = bank.get(cue) else {
                continue;
            };
            commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
        }
    }
}

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioConfig>()
            .init_resource::<SoundBank>()
            .add_systems(Startup, load_sound_bank)
            .add_systems(PostUpdate, play_queued_sounds);
    }
}
