//! Tunable constants and on-disk settings.
//!
//! Every duration the boot choreography uses lives in [`Timings`]. The
//! defaults reproduce the classic sequence; a `config.json` may override any
//! subset of them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ────────────────────────────────────────────────────────────────
// Timings
// ────────────────────────────────────────────────────────────────

/// Durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Period of the BIOS line reveal.
    pub bios_tick_ms: u64,
    /// Pause between the last BIOS tick and the XP splash.
    pub bios_hold_ms: u64,
    /// How long the XP splash with the progress bar stays up.
    pub xp_boot_ms: u64,
    /// How long "Welcome" is shown before the logon screen.
    pub welcome_ms: u64,
    /// The cursor shows once the revealed index is within this many
    /// entries of the end of the BIOS table.
    pub cursor_window: usize,
    pub cursor_blink_ms: u64,
    pub segment_count: usize,
    pub segment_stagger_ms: u64,
    pub segment_cycle_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            bios_tick_ms: 200,
            bios_hold_ms: 1000,
            xp_boot_ms: 8000,
            welcome_ms: 1000,
            cursor_window: 2,
            cursor_blink_ms: 1000,
            segment_count: 3,
            segment_stagger_ms: 200,
            segment_cycle_ms: 2000,
        }
    }
}

impl Timings {
    pub fn bios_tick(&self) -> Duration {
        Duration::from_millis(self.bios_tick_ms)
    }

    pub fn bios_hold(&self) -> Duration {
        Duration::from_millis(self.bios_hold_ms)
    }

    pub fn xp_boot(&self) -> Duration {
        Duration::from_millis(self.xp_boot_ms)
    }

    pub fn welcome(&self) -> Duration {
        Duration::from_millis(self.welcome_ms)
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }

    pub fn segment_stagger(&self) -> Duration {
        Duration::from_millis(self.segment_stagger_ms)
    }

    pub fn segment_cycle(&self) -> Duration {
        Duration::from_millis(self.segment_cycle_ms)
    }

    /// Earliest moment the boot sequence can report completion for a BIOS
    /// table of `lines` entries.
    pub fn boot_total(&self, lines: usize) -> Duration {
        self.bios_tick() * lines as u32 + self.bios_hold() + self.xp_boot() + self.welcome()
    }
}

// ────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timings: Timings,
    /// Directory holding the boot logo and the secondary logo.
    pub assets_dir: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            assets_dir: PathBuf::from("assets/images"),
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl Settings {
    /// Window size to open with. A dimension that is not a positive finite
    /// number falls back to its default.
    pub fn window_size(&self) -> (f32, f32) {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                tracing::warn!(value, fallback, "invalid window dimension in config");
                fallback
            }
        };
        (
            pick(self.window_width, defaults.window_width),
            pick(self.window_height, defaults.window_height),
        )
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let settings = Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(settings)
    }
}
