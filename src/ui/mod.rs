/// Views for the home page, the trip page and the lightbox overlay
///
/// Views are plain functions from state to `Element`; all interaction is
/// reported back as `Message`s.
pub mod home;
pub mod jump;
pub mod lightbox;
pub mod swipe;
pub mod trip;

use iced::widget::{column, container, text, Column};
use iced::{Background, Border, Color, Element, Length, Theme};

use crate::state::data::DayColor;
use crate::Message;

pub mod palette {
    use iced::Color;

    pub fn stone_950() -> Color {
        Color::from_rgb8(0x0c, 0x0a, 0x09)
    }
    pub fn stone_900() -> Color {
        Color::from_rgb8(0x1c, 0x19, 0x17)
    }
    pub fn stone_800() -> Color {
        Color::from_rgb8(0x29, 0x25, 0x24)
    }
    pub fn stone_700() -> Color {
        Color::from_rgb8(0x44, 0x40, 0x3c)
    }
    pub fn stone_500() -> Color {
        Color::from_rgb8(0x78, 0x71, 0x6c)
    }
    pub fn stone_400() -> Color {
        Color::from_rgb8(0xa8, 0xa2, 0x9e)
    }
    pub fn stone_300() -> Color {
        Color::from_rgb8(0xd6, 0xd3, 0xd1)
    }
    pub fn stone_100() -> Color {
        Color::from_rgb8(0xf5, 0xf5, 0xf4)
    }
}

/// Text accent for a day or course color
pub fn accent(color: DayColor) -> Color {
    match color {
        DayColor::Amber => Color::from_rgb8(0xfb, 0xbf, 0x24),
        DayColor::Emerald => Color::from_rgb8(0x34, 0xd3, 0x99),
        DayColor::Rose => Color::from_rgb8(0xfb, 0x71, 0x85),
        DayColor::Stone => palette::stone_400(),
        DayColor::Blue => Color::from_rgb8(0x60, 0xa5, 0xfa),
    }
}

/// Dark tinted background behind a day or course card
fn tint(color: DayColor) -> Color {
    let base = palette::stone_800();
    let accent = accent(color);
    let mix = if color == DayColor::Stone { 0.0 } else { 0.12 };
    Color {
        r: base.r + (accent.r - base.r) * mix,
        g: base.g + (accent.g - base.g) * mix,
        b: base.b + (accent.b - base.b) * mix,
        a: 1.0,
    }
}

/// Rounded card with a thin accent border
pub fn card<'a>(
    content: impl Into<Element<'a, Message>>,
    color: DayColor,
) -> container::Container<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(tint(color))),
            border: Border {
                color: Color { a: 0.35, ..accent(color) },
                width: 1.0,
                radius: 20.0.into(),
            },
            ..container::Style::default()
        })
}

/// Full-width band with a flat background
pub fn band<'a>(
    content: impl Into<Element<'a, Message>>,
    background: Color,
) -> container::Container<'a, Message> {
    container(content)
        .padding([64, 32])
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            ..container::Style::default()
        })
}

/// Small uppercase kicker above a section title
pub fn section_header<'a>(kicker: &'a str, title: &'a str, color: DayColor) -> Column<'a, Message> {
    column![
        text(kicker.to_uppercase()).size(13).color(accent(color)),
        text(title).size(40).color(palette::stone_100()),
    ]
    .spacing(8)
    .align_x(iced::Alignment::Center)
    .width(Length::Fill)
}

pub fn stat_card<'a>(icon: &'a str, value: String, label: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(icon).size(28),
            text(value).size(24).color(palette::stone_100()),
            text(label).size(13).color(palette::stone_500()),
        ]
        .spacing(4)
        .align_x(iced::Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::stone_800())),
        border: Border {
            color: palette::stone_700(),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    })
    .into()
}

/// Muted body text
pub fn body<'a>(content: impl text::IntoFragment<'a>) -> text::Text<'a> {
    text(content).size(15).color(palette::stone_300())
}

/// Secondary line under a title
pub fn muted<'a>(content: impl text::IntoFragment<'a>) -> text::Text<'a> {
    text(content).size(13).color(palette::stone_500())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stone_has_no_tint() {
        assert_eq!(tint(DayColor::Stone), palette::stone_800());
        assert_ne!(tint(DayColor::Emerald), palette::stone_800());
    }
}
