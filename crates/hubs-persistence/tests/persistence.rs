//! Round trips through the public persistence API.

use hubs_model::{CalculatorConfig, FieldSpec, StateSnapshot};
use hubs_persistence::{PersistenceError, load_state, load_state_with, save_state};
use tempfile::tempdir;

#[test]
fn committed_values_survive_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let snapshot = StateSnapshot {
        lift_value: 17.5,
        slope_value: 2.7,
        width_value: 61.5,
    };
    save_state(&snapshot, &path).unwrap();

    let restored = load_state(&path).unwrap();
    assert_eq!(restored, snapshot);
    assert_eq!(restored.slope_value.to_bits(), 2.7f32.to_bits());
}

#[test]
fn reload_without_commit_yields_defaults() {
    let dir = tempdir().unwrap();
    let restored = load_state(&dir.path().join("never-written.json")).unwrap();
    assert_eq!(restored.lift_value, 9.0);
    assert_eq!(restored.slope_value, 2.0);
    assert_eq!(restored.width_value, 28.0);
}

#[test]
fn partial_file_fills_missing_slots() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, br#"{"version": 1, "values": {"width_value": 50.0}}"#).unwrap();

    let restored = load_state(&path).unwrap();
    assert_eq!(restored.width_value, 50.0);
    assert_eq!(restored.lift_value, 9.0);
}

#[test]
fn invalid_file_reports_user_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, b"{").unwrap();

    let error = load_state(&path).unwrap_err();
    assert!(matches!(error, PersistenceError::InvalidFormat { .. }));
    assert!(error.user_message().contains("not a valid state file"));
    assert!(error.suggestion().is_some());
}

#[test]
fn missing_file_restores_configured_defaults() {
    let dir = tempdir().unwrap();
    let config = CalculatorConfig {
        lift: FieldSpec {
            default: 12.0,
            ..FieldSpec::LIFT
        },
        ..CalculatorConfig::default()
    };
    let restored = load_state_with(&dir.path().join("never-written.json"), &config).unwrap();
    assert_eq!(restored, config.defaults());
    assert_eq!(restored.lift_value, 12.0);
}
