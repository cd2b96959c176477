use iced::widget::{button, canvas, center, column, container, image, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Background, Color, ContentFit, Element, Length, Theme};

use crate::state::lightbox::LightboxInput;
use crate::state::page::TripPage;
use crate::ui::palette;
use crate::ui::swipe::SwipeSurface;
use crate::Message;

/// Full-window overlay for the open lightbox, `None` while closed.
///
/// Shows the photo at the current index, its caption and "n / total".
/// Photos without a readable original show their alt text instead.
/// A press on the dark backdrop closes; presses on the photo or the
/// caption do not.
pub fn view(page: &TripPage) -> Option<Element<'_, Message>> {
    let index = page.lightbox().current()?;
    let entry = page.gallery().get(index)?;
    let photo = &entry.photo;

    let picture: Element<'_, Message> = match page.full_image(index) {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => center(text(photo.alt.as_str()).size(18).color(palette::stone_400())).into(),
    };

    let surface = canvas(SwipeSurface).width(Length::Fill).height(Length::Fill);
    let framed = container(stack![picture, surface])
        .width(Length::Fill)
        .height(Length::FillPortion(8));

    let mut caption = column![].spacing(6).align_x(Alignment::Center);
    if let Some(text_caption) = &photo.caption {
        caption = caption.push(text(text_caption.as_str()).size(18).color(palette::stone_100()));
    }
    if let Some(label) = page.lightbox().position_label() {
        caption = caption.push(text(label).size(14).color(palette::stone_400()));
    }

    let controls = row![
        nav_button("‹", LightboxInput::Previous),
        opaque(container(caption).width(Length::Fill).center_x(Length::Fill)),
        nav_button("›", LightboxInput::Next),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let top = row![
        iced::widget::horizontal_space(),
        nav_button("✕", LightboxInput::Close),
    ];

    let content = column![top, opaque(framed), controls]
        .spacing(16)
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill);

    let backdrop = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color { a: 0.94, ..palette::stone_950() })),
            ..container::Style::default()
        });

    Some(opaque(mouse_area(backdrop).on_press(Message::Lightbox(LightboxInput::Backdrop))))
}

fn nav_button<'a>(label: &'a str, input: LightboxInput) -> Element<'a, Message> {
    button(text(label).size(28).color(palette::stone_100()))
        .padding([6, 16])
        .style(button::text)
        .on_press(Message::Lightbox(input))
        .into()
}
