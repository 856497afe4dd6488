//! The top-level state machine: `Booting → Logon → Desktop`.
//!
//! Exactly one view is mounted at a time. Switching phase drops the old
//! view, which releases any timers it still held.

use crate::boot::{BootScene, BootSequence, BootTimer};
use crate::config::Timings;
use crate::desktop::DesktopPlaceholder;
use crate::logon::{LogonScene, LogonScreen};
use crate::timers::TimerHost;

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Booting,
    Logon,
    Desktop,
}

impl AppPhase {
    pub fn label(&self) -> &'static str {
        match self {
            AppPhase::Booting => "booting",
            AppPhase::Logon => "logon",
            AppPhase::Desktop => "desktop",
        }
    }
}

/// Callbacks the container hands to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    BootComplete,
    Login,
}

#[derive(Debug)]
enum Mounted {
    Boot(BootSequence<AppMessage>),
    Logon(LogonScreen<AppMessage>),
    Desktop(DesktopPlaceholder),
}

/// What to draw for the current phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Boot(BootScene),
    Logon(LogonScene),
    Desktop(DesktopPlaceholder),
}

#[derive(Debug)]
pub struct AppContainer {
    host: TimerHost<BootTimer>,
    view: Mounted,
}

impl Default for AppContainer {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl AppContainer {
    pub fn new(timings: Timings) -> Self {
        let host = TimerHost::new();
        let boot = BootSequence::mount(host.clone(), timings, AppMessage::BootComplete);
        tracing::info!("phase -> booting");

        Self {
            host,
            view: Mounted::Boot(boot),
        }
    }

    pub fn phase(&self) -> AppPhase {
        match self.view {
            Mounted::Boot(_) => AppPhase::Booting,
            Mounted::Logon(_) => AppPhase::Logon,
            Mounted::Desktop(_) => AppPhase::Desktop,
        }
    }

    /// Virtual time since the container was created.
    pub fn now(&self) -> Duration {
        self.host.now()
    }

    /// Timers still armed by the mounted view.
    pub fn pending_timers(&self) -> usize {
        self.host.pending()
    }

    pub fn boot(&self) -> Option<&BootSequence<AppMessage>> {
        match &self.view {
            Mounted::Boot(boot) => Some(boot),
            _ => None,
        }
    }

    /// Apply a callback from a child. Anything that does not move the
    /// machine forward from the current phase is ignored.
    pub fn update(&mut self, message: AppMessage) {
        match (self.phase(), message) {
            (AppPhase::Booting, AppMessage::BootComplete) => {
                self.view = Mounted::Logon(LogonScreen::mount(self.host.now(), AppMessage::Login));
                tracing::info!("phase -> logon");
            }
            (AppPhase::Logon, AppMessage::Login) => {
                self.view = Mounted::Desktop(DesktopPlaceholder);
                tracing::info!("phase -> desktop");
            }
            (phase, message) => {
                tracing::debug!(?phase, ?message, "message ignored");
            }
        }
    }

    /// Advance the clock, letting the mounted view react to whatever came
    /// due, then apply the callbacks it produced.
    pub fn advance(&mut self, by: Duration) {
        let emitted = match &mut self.view {
            Mounted::Boot(boot) => boot.advance(by),
            Mounted::Logon(_) | Mounted::Desktop(_) => {
                self.host.settle(self.host.now() + by);
                Vec::new()
            }
        };

        for message in emitted {
            self.update(message);
        }
    }

    /// The login control was clicked. Yields the login callback when the
    /// logon view is mounted.
    pub fn click_login(&self) -> Option<AppMessage> {
        match &self.view {
            Mounted::Logon(logon) => Some(logon.click()),
            _ => None,
        }
    }

    pub fn scene(&self) -> Scene {
        match &self.view {
            Mounted::Boot(boot) => Scene::Boot(boot.scene()),
            Mounted::Logon(logon) => Scene::Logon(logon.scene(self.host.now())),
            Mounted::Desktop(desktop) => Scene::Desktop(*desktop),
        }
    }
}
