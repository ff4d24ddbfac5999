use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = ImportConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ImportConfig::default());
    assert_eq!(cfg.delimiter, ',');
    assert!(cfg.bake);
    assert_eq!(cfg.rate_column, RateColumn::Auto);
    assert_eq!(cfg.duplicate_policy, DuplicatePolicy::Overwrite);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn partial_config_overrides_selected_fields() {
    let cfg = ImportConfig::from_json(
        r#"{
            "delimiter": ";",
            "target_rate": 24.0,
            "rate_column": "absent",
            "fallback_rate": 60,
            "duplicate_policy": "reject",
            "logging": { "level": "debug" }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.delimiter, ';');
    assert_eq!(cfg.target_rate, Some(24.0));
    assert_eq!(cfg.fallback_rate, Some(60.0));
    assert_eq!(cfg.rate_column, RateColumn::Absent);
    assert_eq!(cfg.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.json);
}

#[test]
fn malformed_config_is_a_serde_error() {
    let err = ImportConfig::from_json("{ \"bake\": \"yes\" }").unwrap_err();
    assert!(matches!(err, FacepipeError::Serde(_)));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = ImportConfig::load(Path::new("target/no/such/config.json")).unwrap_err();
    assert!(matches!(err, FacepipeError::Io(_)));
}
