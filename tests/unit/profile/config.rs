use super::*;

#[test]
fn empty_object_is_the_default_site() {
    let config = SiteConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn sections_override_independently() {
    let config = SiteConfig::from_json_str(
        r#"{"profile": {"name": "Ada"}, "motion": {"reveal_stagger": 0.2}}"#,
    )
    .unwrap();
    assert_eq!(config.profile.name, "Ada");
    assert_eq!(config.motion.reveal_stagger, 0.2);
    assert_eq!(config.motion.reveal_duration, 0.5);
}

#[test]
fn invalid_motion_is_a_validation_error() {
    let err = SiteConfig::from_json_str(r#"{"motion": {"reveal_duration": -1.0}}"#).unwrap_err();
    assert!(matches!(err, PageError::Validation(_)));
    assert!(err.to_string().contains("motion:"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SiteConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, PageError::Serde(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = SiteConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, PageError::Other(_)));
    assert!(format!("{err:#}").contains("does/not/exist.json"));
}
