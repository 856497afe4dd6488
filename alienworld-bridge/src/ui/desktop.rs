use super::{solid, DESKTOP_GREEN};
use crate::messages::Message;

use alienworld_core::DesktopPlaceholder;

use iced::font::Weight;
use iced::widget::{container, text};
use iced::{Color, Element, Font, Length};

pub fn view<'a>(desktop: &DesktopPlaceholder) -> Element<'a, Message> {
    container(
        text(desktop.caption())
            .size(36)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            })
            .color(Color::WHITE),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(solid(DESKTOP_GREEN))
    .into()
}
