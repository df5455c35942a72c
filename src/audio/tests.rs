use super::{AudioConfig, SoundCue, SoundQueue};
use crate::actor::SoundSink;

#[test]
fn test_queue_drains_in_request_order() {
    let mut queue = SoundQueue::default();
    queue.play_one_shot(SoundCue::Jump);
    queue.play_one_shot(SoundCue::Attack);

    let drained: Vec<_> = queue.drain().collect();
    assert_eq!(drained, vec![SoundCue::Jump, SoundCue::Attack]);
    assert!(queue.is_empty());
}

#[test]
fn test_unconfigured_cues_have_no_path() {
    let config = AudioConfig {
        jump: Some("audio/jump.ogg".to_string()),
        ..Default::default()
    };
    assert_eq!(config.path_for(SoundCue::Jump), Some("audio/jump.ogg"));
    assert_eq!(config.path_for(SoundCue::GameOver), None);
}
