use super::{faded, solid};
use crate::messages::Message;

use alienworld_core::boot::WelcomeScene;

use iced::widget::{container, text};
use iced::{Color, Element, Length};

/// Base caption size; the zoom scales it.
const CAPTION_SIZE: f32 = 30.0;

pub fn view<'a>(scene: &WelcomeScene) -> Element<'a, Message> {
    container(
        text(scene.caption)
            .size(CAPTION_SIZE * scene.scale)
            .color(faded(Color::WHITE, scene.opacity)),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(solid(Color::BLACK))
    .into()
}
