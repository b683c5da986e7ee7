use super::*;

fn names(tween: &Tween) -> Vec<&str> {
    tween.targets.iter().map(|s| s.class_name()).collect()
}

#[test]
fn sequence_has_two_phases_in_order() {
    let tl = entrance_timeline(&MotionConfig::default());
    let labels: Vec<&str> = tl.phases().iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec![ENTRANCE, REVEAL]);
    assert!(tl.is_paused());
    tl.validate().unwrap();
}

#[test]
fn entrance_scales_the_photo_only() {
    let tl = entrance_timeline(&MotionConfig::default());
    let phase = &tl.phases()[0];
    assert_eq!(phase.start, 0.0);
    assert_eq!(names(&phase.tween), vec!["icon"]);
    assert_eq!(phase.tween.duration, 1.2);
    assert_eq!(phase.tween.from, VisualState::opacity_scale(1.0, 0.7));
    assert_eq!(phase.tween.to, VisualState::opacity_scale(1.0, 1.0));
    assert_eq!(phase.tween.ease, Ease::ElasticOut);
}

#[test]
fn reveal_fades_text_with_stagger() {
    let tl = entrance_timeline(&MotionConfig::default());
    let phase = &tl.phases()[1];
    assert_eq!(phase.start, 0.3);
    assert_eq!(names(&phase.tween), vec!["title", "subtitle", "paragraph"]);
    assert_eq!(phase.tween.duration, 0.5);
    assert_eq!(phase.tween.stagger, 0.1);
    assert_eq!(phase.tween.from, VisualState::opacity(0.0));
    assert_eq!(phase.tween.to, VisualState::opacity(1.0));
    assert_eq!(phase.tween.ease, Ease::ExpoInOut);
}

#[test]
fn phases_overlap() {
    let tl = entrance_timeline(&MotionConfig::default());
    let entrance_end = tl.phases()[0].start + tl.phases()[0].tween.span();
    assert!(tl.phases()[1].start < entrance_end);
    assert!((tl.duration() - 1.2).abs() < 1e-12);
}

#[test]
fn opacity_of_photo_is_held() {
    let tl = entrance_timeline(&MotionConfig::default());
    for i in 0..=24 {
        let t = f64::from(i) * 0.05;
        let icon = tl.sample(t)[&Selector::class("icon")];
        assert_eq!(icon.opacity, Some(1.0));
    }
}

#[test]
fn each_call_builds_an_independent_timeline() {
    let motion = MotionConfig::default();
    let a = entrance_timeline(&motion).resume();
    let b = entrance_timeline(&motion);
    assert!(!a.is_paused());
    assert!(b.is_paused());
}

#[test]
fn motion_config_overrides_from_partial_json() {
    let motion: MotionConfig = serde_json::from_str(r#"{"reveal_offset": 1.2}"#).unwrap();
    assert_eq!(motion.reveal_offset, 1.2);
    assert_eq!(motion.entrance_duration, 1.2);
    let tl = entrance_timeline(&motion);
    assert_eq!(tl.phases()[1].start, 1.2);

    assert!(serde_json::from_str::<MotionConfig>(r#"{"speed": 2}"#).is_err());
}
