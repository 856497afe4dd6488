use super::{faded, solid, BIOS_BODY};
use crate::messages::Message;

use alienworld_core::boot::{BiosScene, LineTone};

use iced::widget::{column, container, text};
use iced::{padding, Color, Element, Font, Length};

pub fn view<'a>(scene: &BiosScene) -> Element<'a, Message> {
    let mut lines = column![].spacing(0);

    for line in &scene.lines {
        let color = match line.tone {
            LineTone::Header => Color::WHITE,
            LineTone::Body => BIOS_BODY,
        };
        lines = lines.push(
            text(line.display())
                .font(Font::MONOSPACE)
                .size(14)
                .color(color),
        );
    }

    if let Some(opacity) = scene.cursor_opacity {
        lines = lines.push(
            container(
                text("_")
                    .font(Font::MONOSPACE)
                    .size(14)
                    .color(faded(Color::WHITE, opacity)),
            )
            .padding(padding::top(16)),
        );
    }

    container(lines)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(solid(Color::BLACK))
        .into()
}
