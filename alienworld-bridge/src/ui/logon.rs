//! The logon screen: brand, welcome card with the login button, footer hint.

use super::hills::Hills;
use super::{
    faded, mix, BRAND_RED, BRAND_YELLOW, BUTTON, BUTTON_HOVER, CARD_BODY, CARD_TITLE, SKY_BOTTOM,
    SKY_MID, SKY_TOP,
};
use crate::helpers::slide_padding;
use crate::messages::Message;

use alienworld_core::logon::{self, LogonScene};

use iced::font::Weight;
use iced::widget::{button, canvas, column, container, row, stack, text};
use iced::{
    gradient, padding, Alignment, Background, Border, Color, Element, Font, Length, Padding,
    Radians, Shadow, Theme, Vector,
};

const CARD_MAX_WIDTH: f32 = 448.0;

fn weight(weight: Weight) -> Font {
    Font {
        weight,
        ..Font::DEFAULT
    }
}

fn slide(offset: f32) -> Padding {
    let (top, bottom) = slide_padding(offset);
    Padding {
        top,
        right: 0.0,
        bottom,
        left: 0.0,
    }
}

pub fn view<'a>(scene: &LogonScene) -> Element<'a, Message> {
    let brand_opacity = scene.brand_opacity;
    let card_opacity = scene.card_opacity;
    let screen_opacity = scene.screen_opacity;

    let brand = row![
        text(logon::BRAND)
            .size(72)
            .font(weight(Weight::Bold))
            .color(faded(BRAND_RED, brand_opacity)),
        text(logon::BRAND_SUFFIX)
            .size(72)
            .font(weight(Weight::Bold))
            .color(faded(BRAND_YELLOW, brand_opacity)),
    ]
    .spacing(18);

    let login = button(
        container(
            text(logon::LOGIN_LABEL)
                .font(weight(Weight::Semibold))
                .color(faded(Color::WHITE, card_opacity)),
        )
        .center_x(Length::Fill),
    )
    .on_press(Message::LoginClicked)
    .width(Length::Fill)
    .padding([12, 24])
    .style(move |_theme, status| login_button_style(status, card_opacity));

    let card = container(
        column![
            text(logon::CARD_TITLE)
                .size(24)
                .font(weight(Weight::Semibold))
                .color(faded(CARD_TITLE, card_opacity)),
            text(logon::CARD_BODY)
                .size(16)
                .color(faded(CARD_BODY, card_opacity)),
            login,
        ]
        .spacing(24)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .max_width(CARD_MAX_WIDTH)
    .style(move |_theme| card_style(card_opacity));

    let footer = text(logon::FOOTER)
        .size(14)
        .color(faded(Color::WHITE, scene.footer_opacity));

    let content = column![
        container(
            column![
                container(brand).padding(slide(scene.brand_offset)),
                container(card).padding(slide(scene.card_offset)),
            ]
            .spacing(28)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill),
        container(footer)
            .center_x(Length::Fill)
            .padding(padding::bottom(32)),
    ];

    let layered = stack![
        canvas(Hills {
            opacity: screen_opacity,
        })
        .width(Length::Fill)
        .height(Length::Fill),
        content,
    ];

    container(layered)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| sky_style(screen_opacity))
        .into()
}

// ────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────

fn sky_style(opacity: f32) -> container::Style {
    let sky = gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, faded(SKY_TOP, opacity))
        .add_stop(0.5, faded(SKY_MID, opacity))
        .add_stop(1.0, faded(SKY_BOTTOM, opacity));

    container::Style {
        background: Some(Background::Gradient(sky.into())),
        ..container::Style::default()
    }
}

fn card_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(Color::WHITE, 0.9 * opacity))),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: faded(Color::BLACK, 0.25 * opacity),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 48.0,
        },
        ..container::Style::default()
    }
}

fn login_button_style(status: button::Status, opacity: f32) -> button::Style {
    let fill = match status {
        button::Status::Hovered => BUTTON_HOVER,
        button::Status::Pressed => mix(BUTTON_HOVER, Color::BLACK, 0.1),
        button::Status::Active | button::Status::Disabled => BUTTON,
    };

    button::Style {
        background: Some(Background::Color(faded(fill, opacity))),
        text_color: faded(Color::WHITE, opacity),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
