use iced::widget::{
    button, column, container, horizontal_space, image, mouse_area, row, scrollable, text, Column,
};
use iced::{Alignment, Background, Border, ContentFit, Element, Length, Shadow, Theme, Vector};
use iced_aw::Wrap;

use crate::state::data::{
    Activity, Costs, DayColor, DaySchedule, Expenses, GolfCourse, Photo, TimeOfDay, Transport, Trip,
};
use crate::state::expand::{ActivityKey, CourseKey, DayKey};
use crate::state::gallery::PhotoOrigin;
use crate::state::page::TripPage;
use crate::ui::jump::Section;
use crate::ui::{accent, band, body, card, muted, palette, section_header, stat_card};
use crate::Message;

const TILE_WIDTH: f32 = 220.0;
const TILE_HEIGHT: f32 = 150.0;

/// Scrollable that holds the trip page; target of scroll restores
pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("trip-page")
}

pub fn view<'a>(trip: &'a Trip, page: &'a TripPage) -> Element<'a, Message> {
    let mut sections = column![
        hero(trip),
        anchored(Section::Accommodation, accommodation(trip, page)),
        anchored(Section::Schedule, schedule(trip, page)),
        anchored(Section::Courses, courses(trip, page)),
        anchored(Section::Food, food(trip)),
    ];

    if let Some(transport) = &trip.transport {
        sections = sections.push(transport_section(transport));
    }
    if trip.costs.is_some() || trip.expenses.is_some() {
        sections = sections.push(costs_section(trip.costs.as_ref(), trip.expenses.as_ref(), trip.info.golfers));
    }
    if !page.gallery().is_empty() {
        sections = sections.push(gallery(page));
    }
    sections = sections.push(footer(trip));

    let content = scrollable(sections)
        .id(scroll_id())
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    column![nav_bar(trip, page), content].into()
}

/// Fixed bar above the scrolling content; gains a shadow once scrolled
fn nav_bar<'a>(trip: &'a Trip, page: &'a TripPage) -> Element<'a, Message> {
    let scrolled = page.scroll().offset().y > 100.0;

    container(
        row![
            text(format!("🏌️ {}", trip.year)).size(18).color(accent(DayColor::Emerald)),
            horizontal_space(),
            row(Section::ALL.into_iter().map(jump_link)).spacing(4),
            button(text("← Alle turer").size(14))
                .style(button::text)
                .on_press(Message::GoHome),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding([12, 32])
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::stone_900())),
        border: Border {
            color: palette::stone_800(),
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: if scrolled {
            Shadow {
                color: iced::Color::BLACK,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            }
        } else {
            Shadow::default()
        },
        ..container::Style::default()
    })
    .into()
}

fn jump_link<'a>(section: Section) -> Element<'a, Message> {
    button(text(section.label()).size(14).color(palette::stone_300()))
        .style(button::text)
        .on_press(Message::JumpTo(section))
        .into()
}

fn hero(trip: &Trip) -> Element<'_, Message> {
    let badges = row![
        badge(format!("👥 {} golfere", trip.info.golfers), DayColor::Emerald),
        badge(format!("📅 {} dager", trip.info.days), DayColor::Amber),
        badge(format!("⛳ {} runder", trip.info.rounds), DayColor::Rose),
    ]
    .spacing(16);

    band(
        column![
            text("ÅRLIG GOLFTUR").size(13).color(accent(DayColor::Emerald)),
            text(trip.title.as_str()).size(64).color(palette::stone_300()),
            text(trip.year.to_string()).size(52).color(accent(DayColor::Amber)),
            text(format!("{} • {}", trip.info.dates, trip.location))
                .size(20)
                .color(palette::stone_400()),
            badges,
            button(text("↓").size(28).color(palette::stone_400()))
                .style(button::text)
                .on_press(Message::JumpTo(Section::Accommodation)),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .width(Length::Fill),
        palette::stone_900(),
    )
    .padding([120, 32])
    .into()
}

fn badge<'a>(label: String, color: DayColor) -> Element<'a, Message> {
    container(text(label).size(14).color(accent(color)))
        .padding([8, 16])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::stone_800())),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn accommodation<'a>(trip: &'a Trip, page: &'a TripPage) -> Element<'a, Message> {
    let house = &trip.accommodation;

    let stats = row![
        stat_card("🚗", house.distance_from_airport.clone(), "Fra flyplassen"),
        stat_card("⭐", format!("{:.2}", house.rating), "Airbnb Rating"),
        stat_card("🛏️", house.bedrooms.to_string(), "Soverom"),
        stat_card("🛁", house.bathrooms.to_string(), "Bad"),
    ]
    .spacing(16);

    let amenities = Wrap::with_elements(
        house
            .amenities
            .iter()
            .map(|item| {
                container(body(format!("{}  {}", item.icon, item.name)))
                    .width(220)
                    .into()
            })
            .collect(),
    )
    .spacing(8.0)
    .line_spacing(12.0);

    let mut about = column![
        text("Om Huset").size(20).color(accent(DayColor::Emerald)),
        body(house.description.as_str()),
    ]
    .spacing(12);
    if !house.highlights.is_empty() {
        about = about.push(Column::with_children(
            house
                .highlights
                .iter()
                .map(|line| body(format!("• {}", line)).into()),
        ));
    }

    let mut links = column![].spacing(8);
    if !house.maps_url.is_empty() {
        links = links.push(link_line("📍", trip.town(), house.maps_url.as_str()));
    }
    if !house.airbnb_url.is_empty() {
        links = links.push(link_line("🏠", "Se på Airbnb", house.airbnb_url.as_str()));
    }

    let left = column![
        card(about, DayColor::Emerald),
        card(
            column![text("Fasiliteter").size(20).color(accent(DayColor::Amber)), amenities].spacing(16),
            DayColor::Stone,
        ),
    ]
    .spacing(24)
    .width(Length::FillPortion(1));

    let right = column![
        card(links, DayColor::Rose),
        card(
            column![
                text("Om Byen").size(20).color(accent(DayColor::Emerald)),
                body(house.town_description.as_str()),
            ]
            .spacing(12),
            DayColor::Stone,
        ),
    ]
    .spacing(24)
    .width(Length::FillPortion(1));

    let mut content = column![
        section_header("Vår Base", house.name.as_str(), DayColor::Emerald),
        container(muted(house.location.as_str())).center_x(Length::Fill),
        stats,
        row![left, right].spacing(32),
    ]
    .spacing(32);

    if !house.photos.is_empty() {
        let tiles = house
            .photos
            .iter()
            .enumerate()
            .map(|(position, photo)| {
                photo_tile(page, photo, PhotoOrigin::Accommodation { position })
            })
            .collect();
        content = content.push(Wrap::with_elements(tiles).spacing(12.0).line_spacing(12.0));
    }

    band(content, palette::stone_900()).into()
}

fn link_line<'a>(icon: &'a str, title: &'a str, url: &'a str) -> Element<'a, Message> {
    column![
        text(format!("{} {}", icon, title)).size(18).color(palette::stone_100()),
        muted(url),
    ]
    .spacing(4)
    .into()
}

fn schedule<'a>(trip: &'a Trip, page: &'a TripPage) -> Element<'a, Message> {
    let days = trip
        .schedule
        .iter()
        .enumerate()
        .map(|(index, day)| day_card(index, day, page));

    band(
        column![
            section_header("Dag for dag", "Program", DayColor::Amber),
            Column::with_children(days).spacing(20),
        ]
        .spacing(40),
        palette::stone_800(),
    )
    .into()
}

fn day_card<'a>(
    day_index: usize,
    day: &'a DaySchedule,
    page: &'a TripPage,
) -> Element<'a, Message> {
    let key = DayKey(day.date.clone());
    let is_open = page.expand().days.is_open(&key);
    let color = accent(day.color);

    let mut summary = row![
        column![
            text(day.date.as_str()).size(30).color(color),
            muted(day.month.to_uppercase()),
        ]
        .align_x(Alignment::Center)
        .width(56),
        column![
            text(format!("{} – {}", day.day_name, day.title))
                .size(20)
                .color(palette::stone_100()),
            text(day.subtitle.as_str()).color(palette::stone_400()),
        ]
        .spacing(4),
        horizontal_space(),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    if let Some(first) = day.courses.first() {
        summary = summary.push(text(first.course_type.as_str()).size(13).color(color));
    }
    summary = summary.push(chevron(is_open));

    let mut content = column![mouse_area(summary).on_press(Message::DayToggled(key))].spacing(16);

    if is_open {
        let mut details = column![].spacing(14);

        for (activity_index, activity) in day.activities.iter().enumerate() {
            details = details.push(activity_row(day_index, activity_index, day, activity, page));
        }

        if !day.courses.is_empty() {
            let rounds = day.courses.iter().map(|course| round_summary(course, day.color));
            details = details.push(row(rounds).spacing(16));
        }

        if let Some(dinner) = &day.dinner {
            details = details.push(
                column![
                    body(format!("👨‍🍳 Middag: {}", dinner.chefs.join(" & "))),
                    muted(dinner.description.as_str()),
                ]
                .spacing(4),
            );
        }

        content = content.push(details);
    }

    card(content, day.color).into()
}

fn activity_row<'a>(
    day_index: usize,
    activity_index: usize,
    day: &'a DaySchedule,
    activity: &'a Activity,
    page: &'a TripPage,
) -> Element<'a, Message> {
    let key = ActivityKey {
        date: day.date.clone(),
        index: activity_index,
    };
    let has_details = activity.description.is_some() || activity.photo.is_some();
    let is_open = has_details && page.expand().activities.is_open(&key);

    let mut heading = row![text(activity.icon.as_str()).size(22), body(activity.title.as_str())]
        .spacing(16)
        .align_y(Alignment::Center);
    if has_details {
        heading = heading.push(horizontal_space()).push(chevron(is_open));
    }

    let heading: Element<'a, Message> = if has_details {
        mouse_area(heading).on_press(Message::ActivityToggled(key)).into()
    } else {
        heading.into()
    };

    let mut content = column![heading].spacing(8);
    if is_open {
        if let Some(description) = &activity.description {
            content = content.push(container(muted(description.as_str())).padding([0, 38]));
        }
        if let Some(photo) = &activity.photo {
            let origin = PhotoOrigin::Activity {
                day: day_index,
                activity: activity_index,
            };
            content = content.push(container(photo_tile(page, photo, origin)).padding([0, 38]));
        }
    }

    content.into()
}

fn round_summary(course: &GolfCourse, color: DayColor) -> Element<'_, Message> {
    let (icon, label) = match course.time_of_day {
        Some(TimeOfDay::Morning) => ("☀️", "Morgen"),
        Some(TimeOfDay::Afternoon) => ("🌅", "Ettermiddag"),
        None => ("⛳", ""),
    };

    let mut details = column![
        row![text(icon).size(18), body(label)].spacing(12),
        text(course.name.as_str()).size(16).color(accent(color)),
        muted(format!(
            "Par {} • {} yards • {}",
            course.par,
            course.yards,
            course.course_type.as_str()
        )),
    ]
    .spacing(6);
    if let Some(distance) = &course.distance_from_house {
        details = details.push(muted(distance.as_str()));
    }

    container(details)
        .padding(16)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::stone_900())),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn courses<'a>(trip: &'a Trip, page: &'a TripPage) -> Element<'a, Message> {
    let mut cards = column![].spacing(24);
    for (day_index, day) in trip.schedule.iter().enumerate() {
        for (course_index, course) in day.courses.iter().enumerate() {
            cards = cards.push(course_card(day_index, course_index, day, course, page));
        }
    }

    band(
        column![section_header("Våre baner", "Golfbanene", DayColor::Emerald), cards].spacing(40),
        palette::stone_900(),
    )
    .into()
}

fn course_card<'a>(
    day_index: usize,
    course_index: usize,
    day: &'a DaySchedule,
    course: &'a GolfCourse,
    page: &'a TripPage,
) -> Element<'a, Message> {
    let key = CourseKey {
        date: day.date.clone(),
        name: course.name.clone(),
    };
    let is_open = page.expand().courses.is_open(&key);
    let color = course.course_type.accent();

    let mut title = column![
        row![
            text(course.course_type.as_str().to_uppercase()).size(12).color(accent(color)),
            text(day.day_name.to_uppercase()).size(12).color(palette::stone_400()),
        ]
        .spacing(12),
        text(course.name.as_str()).size(26).color(palette::stone_100()),
    ]
    .spacing(6);
    if let Some(distance) = &course.distance_from_house {
        title = title.push(text(distance.as_str()).color(palette::stone_400()));
    }

    let mut summary = row![title, horizontal_space()].align_y(Alignment::Center).spacing(16);
    if let Some(established) = &course.established {
        summary = summary.push(
            column![
                text(established.to_string()).size(28).color(accent(color)),
                muted(established.label()),
            ]
            .align_x(Alignment::End),
        );
    }
    summary = summary.push(chevron(is_open));

    let mut content = column![mouse_area(summary).on_press(Message::CourseToggled(key))].spacing(20);

    if is_open {
        let mut stats = row![
            course_stat(course.par.to_string(), "PAR"),
            course_stat(course.yards.to_string(), "YARDS"),
        ]
        .spacing(16);
        if let Some(greenfee) = &course.greenfee {
            stats = stats.push(course_stat(greenfee.clone(), "Greenfee"));
        }
        if let Some(ranking) = &course.ranking {
            stats = stats.push(course_stat(ranking.clone(), "Ranking"));
        }

        let mut details = column![stats, muted(course.description.as_str())].spacing(16);
        if let Some(designer) = &course.designer {
            details = details.push(body(format!("🏌️ Designer: {}", designer)));
        }
        if let Some(tee_time) = &course.tee_time {
            details = details.push(body(format!("🕘 Tee time: {}", tee_time)));
        }
        if let Some(url) = &course.website_url {
            details = details.push(muted(url.as_str()));
        }
        if !course.photos.is_empty() {
            let tiles = course
                .photos
                .iter()
                .enumerate()
                .map(|(position, photo)| {
                    let origin = PhotoOrigin::Course {
                        day: day_index,
                        course: course_index,
                        position,
                    };
                    photo_tile(page, photo, origin)
                })
                .collect();
            details = details.push(Wrap::with_elements(tiles).spacing(12.0).line_spacing(12.0));
        }

        content = content.push(details);
    }

    card(content, DayColor::Stone).into()
}

fn course_stat<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    column![
        text(value).size(22).color(palette::stone_100()),
        muted(label),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn food(trip: &Trip) -> Element<'_, Message> {
    let dinners: Vec<Element<'_, Message>> = trip
        .dinner_days()
        .filter_map(|day| {
            let dinner = day.dinner.as_ref()?;
            let chefs = if dinner.chefs.len() > 1 { "Kokker" } else { "Kokk" };

            let mut content = column![
                muted(format!("{} kveld", day.day_name)),
                text(dinner.description.as_str()).size(18).color(palette::stone_100()),
            ]
            .spacing(8);
            if let Some(menu) = &dinner.menu {
                content = content.push(muted(menu.as_str()));
            }
            content = content.push(
                text(format!("👨‍🍳 {}: {}", chefs, dinner.chefs.join(" & ")))
                    .color(accent(day.color)),
            );

            Some(container(card(content, day.color)).width(320).into())
        })
        .collect();

    let mut content = column![
        section_header("Kulinarisk", "Mat & Drikke", DayColor::Rose),
        Wrap::with_elements(dinners).spacing(24.0).line_spacing(24.0),
    ]
    .spacing(40);

    if !trip.restaurants.is_empty() {
        let list = trip.restaurants.iter().map(|restaurant| {
            column![body(format!("• {}", restaurant.name)), muted(restaurant.description.as_str())]
                .spacing(2)
                .into()
        });
        content = content.push(card(
            column![
                text("🍻 Restauranter i området").size(20).color(palette::stone_100()),
                Column::with_children(list).spacing(12),
            ]
            .spacing(16),
            DayColor::Stone,
        ));
    }

    band(content, palette::stone_900()).into()
}

fn transport_section(transport: &Transport) -> Element<'_, Message> {
    let legs = transport.legs.iter().map(|leg| {
        let mut line = column![body(format!("{}  {}", leg.icon, leg.title))].spacing(4);
        let times = match (&leg.departure, &leg.arrival) {
            (Some(departure), Some(arrival)) => Some(format!("{} → {}", departure, arrival)),
            (Some(departure), None) => Some(format!("Avgang {}", departure)),
            (None, Some(arrival)) => Some(format!("Ankomst {}", arrival)),
            (None, None) => None,
        };
        if let Some(times) = times {
            line = line.push(muted(times));
        }
        if let Some(description) = &leg.description {
            line = line.push(muted(description.as_str()));
        }
        line.into()
    });

    let mut content = column![
        section_header("Reise", "Transport", DayColor::Blue),
        card(Column::with_children(legs).spacing(16), DayColor::Blue),
    ]
    .spacing(40);
    if let Some(note) = &transport.note {
        content = content.push(container(muted(note.as_str())).center_x(Length::Fill));
    }

    band(content, palette::stone_800()).into()
}

fn costs_section<'a>(
    costs: Option<&'a Costs>,
    expenses: Option<&'a Expenses>,
    golfers: u32,
) -> Element<'a, Message> {
    let mut cards = row![].spacing(24);

    if let Some(costs) = costs {
        let mut list = Column::with_children(costs.items.iter().map(|item| {
            let mut line = row![body(item.label.as_str()), horizontal_space(), body(item.amount.as_str())];
            if let Some(note) = &item.note {
                line = line.push(container(muted(note.as_str())).padding([0, 12]));
            }
            line.into()
        }))
        .spacing(10);
        if let Some(total) = &costs.total_per_person {
            list = list.push(
                text(format!("Totalt per person: {}", total)).color(accent(DayColor::Amber)),
            );
        }
        if let Some(note) = &costs.note {
            list = list.push(muted(note.as_str()));
        }
        cards = cards.push(card(list, DayColor::Amber));
    }

    if let Some(expenses) = expenses {
        let mut list = Column::with_children(expenses.entries.iter().map(|entry| {
            row![
                body(entry.description.as_str()),
                horizontal_space(),
                muted(entry.paid_by.as_str()),
                body(format!("{:.2} {}", entry.amount, expenses.currency)),
            ]
            .spacing(12)
            .into()
        }))
        .spacing(10);
        list = list.push(
            text(format!(
                "Sum {:.2} {} • {:.2} {} per golfer",
                expenses.total(),
                expenses.currency,
                expenses.share(golfers),
                expenses.currency
            ))
            .color(accent(DayColor::Amber)),
        );
        cards = cards.push(card(list, DayColor::Stone));
    }

    band(
        column![section_header("Budsjett", "Kostnader", DayColor::Amber), cards].spacing(40),
        palette::stone_900(),
    )
    .into()
}

fn gallery(page: &TripPage) -> Element<'_, Message> {
    let tiles = page
        .gallery()
        .entries()
        .iter()
        .map(|entry| photo_tile(page, &entry.photo, entry.origin))
        .collect();

    band(
        column![
            section_header("Bilder", "Galleri", DayColor::Blue),
            Wrap::with_elements(tiles).spacing(12.0).line_spacing(12.0),
        ]
        .spacing(40),
        palette::stone_800(),
    )
    .into()
}

fn footer(trip: &Trip) -> Element<'_, Message> {
    band(
        column![
            text(format!("🏌️ {} {}", trip.title, trip.year)).size(20).color(palette::stone_100()),
            muted(format!("{} • {}", trip.info.dates, trip.location)),
            button(text("🏠 Alle turer").size(14))
                .style(button::secondary)
                .on_press(Message::GoHome),
            muted("Arrangert med ❤️ for golfgutta"),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .width(Length::Fill),
        palette::stone_950(),
    )
    .padding(48)
    .into()
}

/// Section wrapped in the container the jump links look for
fn anchored(section: Section, content: Element<'_, Message>) -> Element<'_, Message> {
    container(content).id(section.id()).width(Length::Fill).into()
}

fn chevron<'a>(open: bool) -> Element<'a, Message> {
    text(if open { "▴" } else { "▾" })
        .size(20)
        .color(palette::stone_400())
        .into()
}

/// Clickable photo thumbnail.
///
/// Carries its gallery index so the lightbox opens without a lookup; a
/// photo that has no index falls back to opening by content.
fn photo_tile<'a>(page: &'a TripPage, photo: &'a Photo, origin: PhotoOrigin) -> Element<'a, Message> {
    let index = page.gallery().index_for(origin);
    let on_press = match index {
        Some(index) => Message::PhotoActivated(index),
        None => Message::PhotoSelected(photo.clone()),
    };

    // Remote, missing and undecodable photos fall back to their alt text
    let source = index.and_then(|index| page.tile_image(index));

    let picture: Element<'a, Message> = match source {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(TILE_WIDTH)
            .height(TILE_HEIGHT)
            .into(),
        None => container(muted(photo.alt.as_str()))
            .center(Length::Fixed(TILE_WIDTH))
            .height(TILE_HEIGHT)
            .into(),
    };

    let tile = container(picture).style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::stone_700())),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    mouse_area(tile)
        .on_press(on_press)
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}
