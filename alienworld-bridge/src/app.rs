//! Application state and boot.

use crate::messages::Message;

use alienworld_core::{AppContainer, Settings};

use iced::time::Instant;
use iced::Task;

pub struct AlienworldApp {
    pub container: AppContainer,
    pub settings: Settings,

    /// Wall-clock time of the last frame, used to advance the simulation.
    pub last_frame: Option<Instant>,
}

impl AlienworldApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            container: AppContainer::new(settings.timings.clone()),
            settings,
            last_frame: None,
        }
    }
}

pub fn boot(settings: Settings) -> (AlienworldApp, Task<Message>) {
    tracing::info!(assets = %settings.assets_dir.display(), "booting");
    (AlienworldApp::new(settings), Task::none())
}
