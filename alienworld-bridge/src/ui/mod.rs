//! Widgets for each scene, plus the shared palette.

pub mod bios;
pub mod desktop;
pub mod hills;
pub mod logon;
pub mod progress;
pub mod welcome;
pub mod xp_boot;

use iced::widget::container;
use iced::{Background, Color, Theme};

// ────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────

pub const BIOS_BODY: Color = rgb(0xd1, 0xd5, 0xdb);
pub const BAR_BORDER: Color = rgb(0x40, 0x40, 0x40);
pub const SEGMENT_EDGE: Color = rgb(0x23, 0x35, 0xc8);
pub const SEGMENT_GLOW: Color = rgb(0x88, 0xa0, 0xf0);
pub const SKY_TOP: Color = rgb(0x60, 0xa5, 0xfa);
pub const SKY_MID: Color = rgb(0x3b, 0x82, 0xf6);
pub const SKY_BOTTOM: Color = rgb(0x25, 0x63, 0xeb);
pub const BRAND_RED: Color = rgb(0xef, 0x44, 0x44);
pub const BRAND_YELLOW: Color = rgb(0xfa, 0xcc, 0x15);
pub const CARD_TITLE: Color = rgb(0x1f, 0x29, 0x37);
pub const CARD_BODY: Color = rgb(0x4b, 0x55, 0x63);
pub const BUTTON: Color = rgb(0x3b, 0x82, 0xf6);
pub const BUTTON_HOVER: Color = rgb(0x25, 0x63, 0xeb);
pub const DESKTOP_GREEN: Color = rgb(0x22, 0xc5, 0x5e);

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

/// `color` with its alpha scaled by `opacity`.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

/// Container style that only paints a flat background.
pub fn solid(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}
