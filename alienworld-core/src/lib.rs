//! # alienworld core
//!
//! Headless side of alienworld XP: the virtual timer host, the boot / logon /
//! desktop state machines and the scene models the window draws from.
//! Nothing in here depends on a GUI toolkit.

pub mod animation;
pub mod assets;
pub mod boot;
pub mod config;
pub mod container;
pub mod desktop;
pub mod logon;
pub mod timers;

// Re-export the pieces the window uses so it can just `use alienworld_core::AppContainer`
pub use assets::Asset;
pub use boot::{BootPhase, BootScene, BootSequence, BootTimer};
pub use config::{ConfigError, Settings, Timings};
pub use container::{AppContainer, AppMessage, AppPhase, Scene};
pub use desktop::DesktopPlaceholder;
pub use logon::{LogonScene, LogonScreen};
pub use timers::{Timer, TimerHost, TimerId};
