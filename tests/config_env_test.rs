use serial_test::serial;
use std::path::PathBuf;

use isbn_ranges::config::{Config, DATA_DIR_VAR, RANGE_MESSAGE_VAR};
use isbn_ranges::domain::{RangeSource, RangeWarning};
use isbn_ranges::ranges;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("RangeMessage.xml")
}

fn set_env(range_message: &PathBuf, data_dir: &PathBuf) {
    // Tests touching the process environment run serially.
    unsafe {
        std::env::set_var(RANGE_MESSAGE_VAR, range_message);
        std::env::set_var(DATA_DIR_VAR, data_dir);
    }
}

fn clear_env() {
    unsafe {
        std::env::remove_var(RANGE_MESSAGE_VAR);
        std::env::remove_var(DATA_DIR_VAR);
    }
}

#[test]
#[serial]
fn test_env_override_is_loaded() {
    let data_dir = tempfile::tempdir().unwrap();
    set_env(&fixture(), &data_dir.path().to_path_buf());

    let config = Config::from_env();
    assert_eq!(config.range_message, Some(fixture()));
    let resolved = ranges::load(&config);
    clear_env();

    assert_eq!(resolved.table.metadata().source, RangeSource::File(fixture()));
}

#[test]
#[serial]
fn test_missing_env_override_warns_then_uses_data_dir() {
    let data_dir = tempfile::tempdir().unwrap();
    let in_data_dir = data_dir.path().join("RangeMessage.xml");
    std::fs::copy(fixture(), &in_data_dir).unwrap();
    let missing = data_dir.path().join("missing.xml");
    set_env(&missing, &data_dir.path().to_path_buf());

    let resolved = ranges::load(&Config::from_env());
    clear_env();

    assert_eq!(resolved.table.metadata().source, RangeSource::File(in_data_dir));
    assert!(matches!(
        resolved.warnings.first(),
        Some(RangeWarning::MissingOverride(p)) if *p == missing
    ));
}
