use super::*;

#[test]
fn default_config_matches_constants() {
    let config = DockConfig::default();
    assert_eq!(config.inset_px, 20.0);
    assert_eq!(config.transition_ms, SNAP_TRANSITION_MS);
    assert_eq!(config.easing, "ease-out");
    assert_eq!(config.reset_fraction, 0.25);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn partial_json_fills_missing_fields_with_defaults() {
    let config: DockConfig = serde_json::from_str(r#"{ "inset_px": 12 }"#).expect("parse");
    assert_eq!(config.inset_px, 12.0);
    assert_eq!(config.transition_ms, SNAP_TRANSITION_MS);
    assert_eq!(config.easing, SNAP_EASING);
}

#[test]
fn empty_json_is_default() {
    let config: DockConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(config, DockConfig::default());
}

#[test]
fn negative_or_non_finite_inset_is_rejected() {
    let config = DockConfig { inset_px: -1.0, ..DockConfig::default() };
    assert_eq!(config.validate(), Err(DockConfigError::InvalidInset(-1.0)));

    let config = DockConfig { inset_px: f64::INFINITY, ..DockConfig::default() };
    assert!(matches!(config.validate(), Err(DockConfigError::InvalidInset(_))));
}

#[test]
fn reset_fraction_outside_unit_range_is_rejected() {
    let config = DockConfig { reset_fraction: 1.5, ..DockConfig::default() };
    assert_eq!(config.validate(), Err(DockConfigError::InvalidResetFraction(1.5)));
}

#[test]
fn blank_easing_is_rejected() {
    let config = DockConfig { easing: "  ".to_owned(), ..DockConfig::default() };
    assert_eq!(config.validate(), Err(DockConfigError::EmptyEasing));
}

#[test]
fn easing_with_css_delimiters_is_rejected() {
    for easing in ["ease-out; color: red", "linear}", "{ease-in"] {
        let config = DockConfig { easing: easing.to_owned(), ..DockConfig::default() };
        assert_eq!(config.validate(), Err(DockConfigError::InvalidEasing(easing.to_owned())));
    }
    let config = DockConfig { easing: "cubic-bezier(0.2, 0.8, 0.2, 1)".to_owned(), ..DockConfig::default() };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn validated_or_default_replaces_invalid_config() {
    let bad = DockConfig { inset_px: f64::NAN, ..DockConfig::default() };
    let (config, err) = bad.validated_or_default();
    assert_eq!(config, DockConfig::default());
    assert!(err.is_some());

    let good = DockConfig { inset_px: 8.0, ..DockConfig::default() };
    let (config, err) = good.clone().validated_or_default();
    assert_eq!(config, good);
    assert!(err.is_none());
}

#[test]
fn error_messages_name_the_field() {
    assert_eq!(
        DockConfigError::InvalidResetFraction(2.0).to_string(),
        "reset fraction must be within 0.0..=1.0 (got 2)"
    );
    assert_eq!(DockConfigError::EmptyEasing.to_string(), "easing must not be empty");
}
