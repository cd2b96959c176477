use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Background, Border, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::catalog::Catalog;
use crate::state::data::{DayColor, Trip};
use crate::ui::{accent, band, muted, palette};
use crate::Message;

pub fn view(catalog: &Catalog) -> Element<'_, Message> {
    let latest = catalog.latest();

    let hero = band(
        column![
            text("🏌️").size(56),
            text(format!("{} {}", latest.title, latest.year))
                .size(56)
                .color(palette::stone_300()),
            text(latest.info.dates.as_str()).size(20).color(palette::stone_400()),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .width(Length::Fill),
        palette::stone_900(),
    )
    .padding([96, 32]);

    let mut page = column![hero];

    let upcoming: Vec<&Trip> = catalog.upcoming().collect();
    if !upcoming.is_empty() {
        page = page.push(trip_section("Kommende turer", DayColor::Emerald, upcoming, true));
    }

    let past: Vec<&Trip> = catalog.past().collect();
    if !past.is_empty() {
        page = page.push(trip_section("Tidligere turer", DayColor::Stone, past, false));
    }

    page = page.push(
        band(
            container(muted("Arrangert med ❤️")).center_x(Length::Fill),
            palette::stone_950(),
        )
        .padding(32),
    );

    scrollable(page).width(Length::Fill).height(Length::Fill).into()
}

fn trip_section<'a>(
    heading: &'a str,
    color: DayColor,
    trips: Vec<&'a Trip>,
    is_upcoming: bool,
) -> Element<'a, Message> {
    let cards = trips
        .into_iter()
        .map(|trip| trip_card(trip, is_upcoming))
        .collect();

    band(
        column![
            text(heading.to_uppercase()).size(13).color(accent(color)),
            Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
        ]
        .spacing(24),
        if is_upcoming { palette::stone_800() } else { palette::stone_900() },
    )
    .into()
}

fn trip_card(trip: &Trip, is_upcoming: bool) -> Element<'_, Message> {
    let color = if is_upcoming { DayColor::Emerald } else { DayColor::Stone };

    let mut heading = row![
        column![
            text(trip.year.to_string()).size(36).color(palette::stone_100()),
            text(trip.title.as_str()).color(palette::stone_400()),
        ],
        Space::with_width(Length::Fill),
    ];
    if is_upcoming {
        heading = heading.push(text("Kommende").size(12).color(accent(DayColor::Emerald)));
    }

    let details = column![
        text(format!("📍 {}", trip.location)).size(14).color(palette::stone_400()),
        text(format!("📅 {}", trip.info.dates)).size(14).color(palette::stone_400()),
        text(format!("⛳ {} runder", trip.info.rounds)).size(14).color(palette::stone_400()),
    ]
    .spacing(6);

    let footer = row![
        muted(format!("{} golfere", trip.info.golfers)),
        Space::with_width(Length::Fill),
        text("Se detaljer →").size(13).color(accent(DayColor::Emerald)),
    ];

    let content = column![heading, details, footer].spacing(16).width(320);

    button(content)
        .padding(24)
        .on_press(Message::OpenTrip(trip.year))
        .style(move |_theme: &Theme, status| {
            let border_alpha = match status {
                button::Status::Hovered | button::Status::Pressed => 0.7,
                _ => 0.35,
            };
            button::Style {
                background: Some(Background::Color(palette::stone_800())),
                border: Border {
                    color: iced::Color { a: border_alpha, ..accent(color) },
                    width: 1.0,
                    radius: 16.0.into(),
                },
                text_color: palette::stone_100(),
                ..button::Style::default()
            }
        })
        .into()
}
