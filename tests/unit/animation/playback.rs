use super::*;
use crate::animation::sequencer::{MotionConfig, entrance_timeline};

#[test]
fn default_sequence_at_ten_fps_yields_thirteen_frames() {
    let tl = entrance_timeline(&MotionConfig::default()).resume();
    let playback = Playback::new(&tl, Fps::new(10, 1).unwrap()).unwrap();
    assert_eq!(playback.frame_count(), 13);
    let frames: Vec<FrameState> = playback.collect();
    assert_eq!(frames.len(), 13);
    assert_eq!(frames[0].frame, FrameIndex(0));
    assert_eq!(frames[12].frame, FrameIndex(12));
}

#[test]
fn first_and_last_frames_match_sequence_endpoints() {
    let tl = entrance_timeline(&MotionConfig::default()).resume();
    let frames: Vec<FrameState> = Playback::new(&tl, Fps::new(10, 1).unwrap())
        .unwrap()
        .collect();

    let first = &frames[0].targets;
    assert_eq!(first[&Selector::class("icon")].scale, Some(0.7));
    assert_eq!(first[&Selector::class("title")].opacity, Some(0.0));
    assert_eq!(first[&Selector::class("paragraph")].opacity, Some(0.0));

    let last = &frames[12].targets;
    assert_eq!(last[&Selector::class("icon")].scale, Some(1.0));
    for name in ["title", "subtitle", "paragraph"] {
        assert_eq!(last[&Selector::class(name)].opacity, Some(1.0));
    }
}

#[test]
fn text_reveal_is_staggered() {
    let tl = entrance_timeline(&MotionConfig::default()).resume();
    let playback = Playback::new(&tl, Fps::new(100, 1).unwrap()).unwrap();
    // 0.45s: title and subtitle are fading in, paragraph has not started.
    let s = playback.state_at(FrameIndex(45));
    let title = s.targets[&Selector::class("title")].opacity.unwrap();
    let subtitle = s.targets[&Selector::class("subtitle")].opacity.unwrap();
    let paragraph = s.targets[&Selector::class("paragraph")].opacity.unwrap();
    assert!(title > subtitle);
    assert!(subtitle > paragraph);
    assert_eq!(paragraph, 0.0);
}

#[test]
fn paused_timeline_stays_at_time_zero() {
    let tl = entrance_timeline(&MotionConfig::default());
    let frames: Vec<FrameState> = Playback::new(&tl, Fps::new(10, 1).unwrap())
        .unwrap()
        .collect();
    assert_eq!(frames.len(), 13);
    assert!(frames.iter().all(|f| f.time_secs == 0.0));
    assert_eq!(frames[12].targets[&Selector::class("icon")].scale, Some(0.7));
}

#[test]
fn invalid_timeline_is_rejected() {
    let motion = MotionConfig {
        reveal_duration: -0.5,
        ..MotionConfig::default()
    };
    let tl = entrance_timeline(&motion);
    assert!(Playback::new(&tl, Fps::new(10, 1).unwrap()).is_err());
}

#[test]
fn frame_state_serializes_selectors_as_keys() {
    let tl = entrance_timeline(&MotionConfig::default()).resume();
    let playback = Playback::new(&tl, Fps::new(10, 1).unwrap()).unwrap();
    let json = serde_json::to_value(playback.state_at(FrameIndex(12))).unwrap();
    assert_eq!(json["frame"], 12);
    assert_eq!(json["targets"]["icon"]["scale"], 1.0);
    assert_eq!(json["targets"]["title"]["opacity"], 1.0);
}

#[test]
fn huge_offset_is_rejected_instead_of_overflowing() {
    let config = crate::profile::config::SiteConfig::from_json_str(
        r#"{"motion": {"reveal_offset": 1e300}}"#,
    )
    .unwrap();
    let tl = entrance_timeline(&config.motion).resume();
    let err = Playback::new(&tl, Fps::new(60, 1).unwrap()).err().unwrap();
    assert!(matches!(err, crate::foundation::error::PageError::Validation(_)));
}

#[test]
fn frame_limit_is_exclusive() {
    let motion = MotionConfig {
        entrance_duration: MAX_FRAMES as f64,
        ..MotionConfig::default()
    };
    let tl = entrance_timeline(&motion).resume();
    assert!(Playback::new(&tl, Fps::new(1, 1).unwrap()).is_err());

    let motion = MotionConfig {
        entrance_duration: (MAX_FRAMES - 2) as f64,
        ..MotionConfig::default()
    };
    let tl = entrance_timeline(&motion).resume();
    let playback = Playback::new(&tl, Fps::new(1, 1).unwrap()).unwrap();
    assert_eq!(playback.frame_count(), MAX_FRAMES - 1);
    let left = (MAX_FRAMES - 1) as usize;
    assert_eq!(playback.size_hint(), (left, Some(left)));
}
