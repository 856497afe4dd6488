//! Update logic: the central message handler.

use crate::app::AlienworldApp;
use crate::messages::Message;

use iced::time::Instant;
use iced::Task;

use std::time::Duration;

pub fn update(app: &mut AlienworldApp, message: Message) -> Task<Message> {
    match message {
        // ────────────────────────────────────────────────────
        // Clock
        // ────────────────────────────────────────────────────

        Message::Frame(now) => {
            let delta = frame_delta(app.last_frame, now);
            app.last_frame = Some(now);

            let before = app.container.phase();
            app.container.advance(delta);
            let after = app.container.phase();
            if before != after {
                tracing::info!("[UI] {} -> {}", before.label(), after.label());
            }
            Task::none()
        }

        // ────────────────────────────────────────────────────
        // Logon
        // ────────────────────────────────────────────────────

        Message::LoginClicked => {
            if let Some(login) = app.container.click_login() {
                app.container.update(login);
            }
            Task::none()
        }

        Message::Exit => {
            tracing::info!("[UI] exiting");
            iced::exit()
        }
    }
}

/// Time since the previous frame. The first frame only starts the clock.
pub fn frame_delta(last: Option<Instant>, now: Instant) -> Duration {
    last.map(|prev| now.saturating_duration_since(prev))
        .unwrap_or_default()
}
