// alienworld-core/tests/config_tests.rs
//
// Settings / Timings loading:
//   defaults, partial JSON overrides, missing file, unreadable and invalid files

use alienworld_core::{Asset, ConfigError, Settings, Timings};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_timings_are_classic() {
    let t = Timings::default();
    assert_eq!(t.bios_tick(), Duration::from_millis(200));
    assert_eq!(t.bios_hold(), Duration::from_millis(1000));
    assert_eq!(t.xp_boot(), Duration::from_millis(8000));
    assert_eq!(t.welcome(), Duration::from_millis(1000));
    assert_eq!(t.cursor_window, 2);
    assert_eq!(t.cursor_blink(), Duration::from_secs(1));
    assert_eq!(t.segment_count, 3);
    assert_eq!(t.segment_stagger(), Duration::from_millis(200));
    assert_eq!(t.segment_cycle(), Duration::from_millis(2000));
}

#[test]
fn test_default_settings() {
    let s = Settings::default();
    assert_eq!(s.timings, Timings::default());
    assert_eq!(s.assets_dir, Path::new("assets/images"));
    assert!(s.window_width > 0.0 && s.window_height > 0.0);
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_empty_object_is_all_defaults() {
    let s = Settings::from_json("{}").unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let s = Settings::from_json(r#"{ "timings": { "xp_boot_ms": 3000 }, "window_width": 800 }"#)
        .unwrap();
    assert_eq!(s.timings.xp_boot(), Duration::from_millis(3000));
    assert_eq!(s.timings.bios_tick(), Duration::from_millis(200));
    assert_eq!(s.window_width, 800.0);
    assert_eq!(s.window_height, Settings::default().window_height);
}

#[test]
fn test_settings_round_trip_through_json() {
    let mut s = Settings::default();
    s.timings.welcome_ms = 42;
    s.assets_dir = "/opt/alienworld".into();

    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(Settings::from_json(&json).unwrap(), s);
}

#[test]
fn test_wrong_type_is_rejected() {
    assert!(Settings::from_json(r#"{ "timings": { "bios_tick_ms": "fast" } }"#).is_err());
}

#[test]
fn test_window_size_keeps_positive_values() {
    let s = Settings::from_json(r#"{ "window_width": 800, "window_height": 600 }"#).unwrap();
    assert_eq!(s.window_size(), (800.0, 600.0));
}

#[test]
fn test_window_size_replaces_non_positive_values() {
    let defaults = Settings::default();
    let s = Settings::from_json(r#"{ "window_width": -5, "window_height": 0 }"#).unwrap();
    assert_eq!(
        s.window_size(),
        (defaults.window_width, defaults.window_height)
    );

    let s = Settings::from_json(r#"{ "window_width": 640, "window_height": -1.5 }"#).unwrap();
    assert_eq!(s.window_size(), (640.0, defaults.window_height));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let s = Settings::load_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "timings": { "bios_tick_ms": 100 } }"#).unwrap();

    let s = Settings::load_from(&path).unwrap();
    assert_eq!(s.timings.bios_tick(), Duration::from_millis(100));
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn test_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

// ============================================================================
// Assets
// ============================================================================

#[test]
fn test_asset_names_and_sizes() {
    assert_eq!(Asset::all().len(), 2);
    assert_eq!(Asset::BootLogo.label(), "boot logo");
    assert_eq!(Asset::SecondaryLogo.label(), "secondary logo");
    assert_eq!(Asset::BootLogo.size(), (400.0, 200.0));
    assert_eq!(Asset::SecondaryLogo.size(), (60.0, 20.0));
    assert_eq!(
        Asset::BootLogo.path_in(Path::new("/a")),
        Path::new("/a/windows-boot-logo.png")
    );
}
