//! The logon screen. Decorative, with a single login button.

use crate::animation::{Fade, Slide};

use std::time::Duration;

pub const BRAND: &str = "alienworld";
pub const BRAND_SUFFIX: &str = "XP";
pub const CARD_TITLE: &str = "Welcome to alienworld xp";
pub const CARD_BODY: &str = "logonui.exe is still in development";
pub const LOGIN_LABEL: &str = "login";
pub const FOOTER: &str = "Press Ctrl+Alt+Delete to log on";

/// Resting opacity of the footer hint.
pub const FOOTER_OPACITY: f32 = 0.8;

/// Outline of the hill silhouette behind the card, on a 100×100 grid.
pub const HILLS: [(f32, f32); 7] = [
    (0.0, 100.0),
    (20.0, 80.0),
    (40.0, 90.0),
    (60.0, 70.0),
    (80.0, 85.0),
    (100.0, 75.0),
    (100.0, 100.0),
];

const SCREEN_FADE: Fade = Fade::new(0, 1000);
const BRAND_SLIDE: Slide = Slide::new(-20.0, Fade::new(500, 800));
const CARD_SLIDE: Slide = Slide::new(20.0, Fade::new(1000, 800));
const FOOTER_FADE: Fade = Fade::new(1500, 800);

/// `M` is handed back on every click of the login button.
#[derive(Debug)]
pub struct LogonScreen<M> {
    on_login: M,
    mounted_at: Duration,
}

impl<M: Clone> LogonScreen<M> {
    pub fn mount(now: Duration, on_login: M) -> Self {
        tracing::debug!(at = ?now, "logon screen mounted");
        Self {
            on_login,
            mounted_at: now,
        }
    }

    /// The login button was clicked. Every click yields the message again.
    pub fn click(&self) -> M {
        tracing::debug!("login clicked");
        self.on_login.clone()
    }

    pub fn on_login(&self) -> &M {
        &self.on_login
    }

    pub fn scene(&self, now: Duration) -> LogonScene {
        LogonScene::at(now.saturating_sub(self.mounted_at))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogonScene {
    pub screen_opacity: f32,
    pub brand_opacity: f32,
    pub brand_offset: f32,
    pub card_opacity: f32,
    pub card_offset: f32,
    pub footer_opacity: f32,
}

impl LogonScene {
    pub fn at(elapsed: Duration) -> Self {
        Self {
            screen_opacity: SCREEN_FADE.progress(elapsed),
            brand_opacity: BRAND_SLIDE.opacity(elapsed),
            brand_offset: BRAND_SLIDE.offset(elapsed),
            card_opacity: CARD_SLIDE.opacity(elapsed),
            card_offset: CARD_SLIDE.offset(elapsed),
            footer_opacity: FOOTER_FADE.progress(elapsed) * FOOTER_OPACITY,
        }
    }
}
