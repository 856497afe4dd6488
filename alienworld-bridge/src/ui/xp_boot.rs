//! The XP splash: logo, progress bar, copyright line and secondary logo.

use super::progress::ProgressBar;
use super::{faded, solid};
use crate::messages::Message;

use alienworld_core::boot::{XpBootScene, BAR_HEIGHT, BAR_WIDTH};
use alienworld_core::Asset;

use iced::widget::{canvas, column, container, image, row, text};
use iced::{Alignment, Color, Element, Length};

use std::path::Path;

fn logo<'a>(asset: Asset, assets_dir: &Path, opacity: f32) -> Element<'a, Message> {
    let (width, height) = asset.size();
    image(image::Handle::from_path(asset.path_in(assets_dir)))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .opacity(opacity)
        .into()
}

pub fn view<'a>(scene: &XpBootScene, assets_dir: &Path) -> Element<'a, Message> {
    let bar = canvas(ProgressBar {
        segments: scene.segments.clone(),
        opacity: scene.bar_opacity,
    })
    .width(Length::Fixed(BAR_WIDTH))
    .height(Length::Fixed(BAR_HEIGHT));

    let center = column![logo(Asset::BootLogo, assets_dir, scene.logo_opacity), bar]
        .spacing(48)
        .align_x(Alignment::Center);

    let footer = row![
        container(
            text(scene.caption)
                .size(12)
                .color(faded(Color::WHITE, scene.caption_opacity)),
        )
        .width(Length::Fill),
        logo(Asset::SecondaryLogo, assets_dir, scene.secondary_logo_opacity),
    ]
    .align_y(Alignment::End)
    .padding(16);

    let layout = column![
        container(center)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        footer,
    ];

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(solid(Color::BLACK))
        .into()
}
