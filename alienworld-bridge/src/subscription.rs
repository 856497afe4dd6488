//! Frame clock and keyboard subscriptions.

use crate::app::AlienworldApp;
use crate::messages::Message;

use alienworld_core::AppPhase;

use iced::{event, keyboard, Subscription};

use std::time::Duration;

/// Roughly 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(app: &AlienworldApp) -> Subscription<Message> {
    let mut subs: Vec<Subscription<Message>> = Vec::new();

    // The desktop is static; everything before it animates.
    if app.container.phase() != AppPhase::Desktop {
        subs.push(iced::time::every(FRAME_INTERVAL).map(Message::Frame));
    }

    subs.push(event::listen_with(|evt, _status, _id| match evt {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Exit),
        _ => None,
    }));

    Subscription::batch(subs)
}
