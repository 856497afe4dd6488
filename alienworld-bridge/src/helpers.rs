//! Shared utility functions.
//!
//! Zero UI dependencies. Used by `main.rs` and the ui modules.

use alienworld_core::Settings;

use anyhow::Context;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

// ────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────

/// Points at a config file to use instead of the platform default.
pub const CONFIG_ENV: &str = "ALIENWORLD_CONFIG";

/// Where settings live: the override if one is given, otherwise
/// `config.json` in the platform config directory.
pub fn resolve_config_path(override_path: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    directories::ProjectDirs::from("dev", "alienworld", "alienworld-xp")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_ENV))
}

pub fn try_load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    Settings::load_from(path).with_context(|| "loading alienworld settings")
}

/// Settings from disk. A broken config never stops the boot sequence.
pub fn load_settings() -> Settings {
    let path = config_path();
    match try_load_settings(path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("{:#}; using defaults", e);
            Settings::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────

/// Vertical room reserved around sliding elements.
pub const SLIDE_ROOM: f32 = 20.0;

/// Top and bottom padding that shifts an element by `offset` without
/// moving its neighbours.
pub fn slide_padding(offset: f32) -> (f32, f32) {
    let offset = offset.clamp(-SLIDE_ROOM, SLIDE_ROOM);
    (SLIDE_ROOM + offset, SLIDE_ROOM - offset)
}

/// Vertical shading of a progress-bar segment: 0 at the top and bottom
/// rows, 1 in the middle.
pub fn segment_shade(row: usize, rows: usize) -> f32 {
    if rows < 2 {
        return 1.0;
    }
    let t = row as f32 / (rows - 1) as f32;
    1.0 - (2.0 * t - 1.0).abs()
}
