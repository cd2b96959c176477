use std::path::PathBuf;

use iced::keyboard::{self, key};
use iced::widget::scrollable::{self, AbsoluteOffset, Viewport};
use iced::widget::stack;
use iced::{window, Element, Subscription, Task, Theme};
use tracing::{debug, error, info, warn};

mod config;
mod error;
mod photo;
mod state;
mod ui;

use config::AppConfig;
use error::AppError;
use photo::thumbnail::generate_thumbnail;
use state::catalog::Catalog;
use state::data::Photo;
use state::expand::{ActivityKey, CourseKey, DayKey};
use state::lightbox::{LightboxInput, NavKey};
use state::page::{RestorePlan, TripPage};
use state::scroll::{RestorePhase, RestoreTicket, ScrollOffset};
use ui::jump::Section;

/// Which page is on screen
enum Page {
    Home,
    Trip(TripPage),
}

/// Main application state
struct Golftur {
    config: AppConfig,
    /// Every known trip, parsed once at startup
    catalog: Catalog,
    page: Page,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A trip card on the home page was clicked
    OpenTrip(u16),
    GoHome,
    DayToggled(DayKey),
    CourseToggled(CourseKey),
    ActivityToggled(ActivityKey),
    /// Viewport report from the trip page scrollable
    Scrolled(Viewport),
    /// Timed scroll-restore attempt for a captured offset
    RestoreScroll(RestoreTicket, RestorePhase),
    /// A frame was drawn while a restore waited for layout
    FrameRendered,
    /// Thumbnail click carrying its gallery index
    PhotoActivated(usize),
    /// Photo click without a known index
    PhotoSelected(Photo),
    Lightbox(LightboxInput),
    /// Background thumbnail finished for (trip year, gallery index)
    ThumbnailReady(u16, usize, Result<PathBuf, String>),
    /// Header link or hero arrow
    JumpTo(Section),
    /// Content offset of the section a jump asked for
    SectionLocated(f32),
}

impl Golftur {
    fn new(config: AppConfig, catalog: Catalog) -> (Self, Task<Message>) {
        info!("🏌️ Golftur initialized with {} trips", catalog.trips().len());

        (
            Golftur {
                config,
                catalog,
                page: Page::Home,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match &self.page {
            Page::Trip(page) => match self.catalog.get(page.year) {
                Some(trip) => format!("{} {}", trip.title, trip.year),
                None => "Golftur".to_string(),
            },
            Page::Home => "Golftur".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenTrip(year) => self.open_trip(year),
            Message::GoHome => {
                if let Page::Trip(page) = &mut self.page {
                    page.teardown();
                }
                self.page = Page::Home;
                Task::none()
            }
            message => {
                // Everything else belongs to an open trip page; anything
                // arriving after the page was left is dropped
                let Page::Trip(page) = &mut self.page else {
                    debug!("dropping {:?} outside a trip page", message);
                    return Task::none();
                };
                update_trip(page, &self.config, message)
            }
        }
    }

    fn open_trip(&mut self, year: u16) -> Task<Message> {
        let Some(trip) = self.catalog.get(year) else {
            warn!("no trip for year {}", year);
            return Task::none();
        };

        if let Page::Trip(previous) = &mut self.page {
            previous.teardown();
        }

        let page = TripPage::new(trip, &self.config.photo_root);
        let cache_dir = &self.config.cache_dir;

        // Only originals found on disk get thumbnails
        let thumbnails: Vec<Task<Message>> = page
            .thumbnail_jobs()
            .map(|(index, path)| {
                Task::perform(
                    generate_thumbnail(path.to_path_buf(), cache_dir.clone()),
                    move |result| Message::ThumbnailReady(year, index, result),
                )
            })
            .collect();

        info!("📖 Opened trip {} ({} photos)", year, page.gallery().len());
        self.page = Page::Trip(page);

        Task::batch(thumbnails).chain(scrollable::scroll_to(
            ui::trip::scroll_id(),
            AbsoluteOffset::default(),
        ))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.page {
            Page::Home => ui::home::view(&self.catalog),
            Page::Trip(page) => {
                let Some(trip) = self.catalog.get(page.year) else {
                    return ui::home::view(&self.catalog);
                };
                let content = ui::trip::view(trip, page);

                match ui::lightbox::view(page) {
                    Some(overlay) => stack![content, overlay].into(),
                    None => content,
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let Page::Trip(page) = &self.page else {
            return Subscription::none();
        };

        let mut subscriptions = Vec::new();
        if page.lightbox().is_open() {
            subscriptions.push(keyboard::on_key_press(lightbox_key));
        }
        if page.scroll().awaiting_frame().is_some() {
            subscriptions.push(window::frames().map(|_| Message::FrameRendered));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn update_trip(page: &mut TripPage, config: &AppConfig, message: Message) -> Task<Message> {
    match message {
        Message::DayToggled(key) => {
            let plan = page.toggle_day(key);
            schedule_restore(plan, config)
        }
        Message::CourseToggled(key) => {
            let plan = page.toggle_course(key);
            schedule_restore(plan, config)
        }
        Message::ActivityToggled(key) => {
            page.toggle_activity(key);
            Task::none()
        }
        Message::Scrolled(viewport) => {
            let offset = viewport.absolute_offset();
            let height = viewport.content_bounds().height;
            let correction = page
                .scroll_mut()
                .observe(ScrollOffset { x: offset.x, y: offset.y }, height);

            match correction {
                Some(target) => scroll_to(target),
                None => Task::none(),
            }
        }
        Message::RestoreScroll(ticket, phase) => {
            match page.scroll_mut().restore(ticket, phase) {
                Some(target) => scroll_to(target),
                None => Task::none(),
            }
        }
        Message::FrameRendered => {
            let Some(ticket) = page.scroll().awaiting_frame() else {
                return Task::none();
            };
            match page.scroll_mut().restore(ticket, RestorePhase::NextFrame) {
                Some(target) => scroll_to(target),
                None => Task::none(),
            }
        }
        Message::PhotoActivated(index) => {
            page.activate_photo(index);
            Task::none()
        }
        Message::PhotoSelected(photo) => {
            page.select_photo(&photo);
            Task::none()
        }
        Message::Lightbox(input) => {
            page.lightbox_input(input);
            Task::none()
        }
        Message::ThumbnailReady(year, index, result) => {
            if year != page.year {
                return Task::none();
            }
            page.set_thumbnail(index, result);
            Task::none()
        }
        Message::JumpTo(section) => {
            debug!(?section, "jump");
            ui::jump::locate(section, ui::trip::scroll_id()).map(Message::SectionLocated)
        }
        Message::SectionLocated(y) => scroll_to(ScrollOffset { x: 0.0, y }),
        Message::OpenTrip(_) | Message::GoHome => Task::none(),
    }
}

/// Apply the immediate attempt now and queue the delayed fallback
fn schedule_restore(plan: RestorePlan, config: &AppConfig) -> Task<Message> {
    let ticket = plan.ticket;
    let delayed = Task::perform(tokio::time::sleep(config.restore_delay), move |_| {
        Message::RestoreScroll(ticket, RestorePhase::Delayed)
    });

    match plan.immediate {
        Some(offset) => Task::batch([scroll_to(offset), delayed]),
        None => delayed,
    }
}

fn scroll_to(offset: ScrollOffset) -> Task<Message> {
    scrollable::scroll_to(
        ui::trip::scroll_id(),
        AbsoluteOffset {
            x: offset.x,
            y: offset.y,
        },
    )
}

fn lightbox_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    let nav = match key.as_ref() {
        keyboard::Key::Named(key::Named::ArrowLeft) => NavKey::Left,
        keyboard::Key::Named(key::Named::ArrowRight) => NavKey::Right,
        keyboard::Key::Named(key::Named::Escape) => NavKey::Escape,
        _ => return None,
    };
    Some(Message::Lightbox(LightboxInput::Key(nav)))
}

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    let catalog = match Catalog::load(config.data_dir.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("could not load trips: {err}");
            return Err(err);
        }
    };

    iced::application(Golftur::title, Golftur::update, Golftur::view)
        .subscription(Golftur::subscription)
        .theme(Golftur::theme)
        .centered()
        .run_with(move || Golftur::new(config, catalog))?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,golftur=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::page::PhotoSlot;
    use std::time::Duration;

    fn app() -> Golftur {
        let config = AppConfig {
            data_dir: None,
            photo_root: PathBuf::from("assets"),
            cache_dir: std::env::temp_dir().join("golftur-test-thumbnails"),
            restore_delay: Duration::from_millis(50),
        };
        let catalog = Catalog::load(None).unwrap();
        Golftur::new(config, catalog).0
    }

    fn trip_page(app: &Golftur) -> &TripPage {
        match &app.page {
            Page::Trip(page) => page,
            Page::Home => panic!("expected a trip page"),
        }
    }

    #[test]
    fn test_open_trip_and_go_home() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(2026));
        assert_eq!(trip_page(&app).year, 2026);
        let expected = format!("{} 2026", app.catalog.get(2026).unwrap().title);
        assert_eq!(app.title(), expected);

        let _ = app.update(Message::GoHome);
        assert!(matches!(app.page, Page::Home));
    }

    #[test]
    fn test_unknown_year_stays_home() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(1999));
        assert!(matches!(app.page, Page::Home));
    }

    #[test]
    fn test_messages_after_leaving_are_ignored() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(2026));
        let _ = app.update(Message::GoHome);

        let _ = app.update(Message::PhotoActivated(0));
        let _ = app.update(Message::FrameRendered);
        assert!(matches!(app.page, Page::Home));
    }

    #[test]
    fn test_stale_thumbnail_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(2026));
        let thumbnail = PathBuf::from("/tmp/x.jpg");
        let _ = app.update(Message::ThumbnailReady(2025, 0, Ok(thumbnail.clone())));
        assert_ne!(trip_page(&app).tile_image(0), Some(thumbnail.as_path()));

        let _ = app.update(Message::ThumbnailReady(2026, 0, Ok(thumbnail.clone())));
        assert_eq!(trip_page(&app).tile_image(0), Some(thumbnail.as_path()));
    }

    #[test]
    fn test_bundled_photos_are_found() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(2026));
        let page = trip_page(&app);

        assert!(!page.gallery().is_empty());
        assert_eq!(page.thumbnail_jobs().count(), page.gallery().len());
    }

    #[test]
    fn test_failed_thumbnail_falls_back_to_alt_text() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(2026));
        assert!(matches!(trip_page(&app).slot(0), Some(PhotoSlot::Original(_))));

        let _ = app.update(Message::ThumbnailReady(2026, 0, Err("could not decode".into())));

        assert_eq!(trip_page(&app).slot(0), Some(&PhotoSlot::Failed));
        assert_eq!(trip_page(&app).tile_image(0), None);
        assert_eq!(trip_page(&app).full_image(0), None);
        // the rest of the gallery is untouched
        assert!(trip_page(&app).tile_image(1).is_some());
    }

    #[test]
    fn test_jump_leaves_page_state_alone() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(2026));
        let _ = app.update(Message::PhotoActivated(1));

        let _ = app.update(Message::JumpTo(Section::Food));
        let _ = app.update(Message::SectionLocated(1800.0));

        assert_eq!(trip_page(&app).lightbox().current(), Some(1));
        assert!(trip_page(&app).scroll().awaiting_frame().is_none());
    }

    #[test]
    fn test_keyboard_mapping() {
        let left = lightbox_key(
            keyboard::Key::Named(key::Named::ArrowLeft),
            keyboard::Modifiers::default(),
        );
        assert!(matches!(
            left,
            Some(Message::Lightbox(LightboxInput::Key(NavKey::Left)))
        ));
        assert!(lightbox_key(
            keyboard::Key::Character("a".into()),
            keyboard::Modifiers::default()
        )
        .is_none());
    }

    #[test]
    fn test_lightbox_round_trip_through_messages() {
        let mut app = app();
        let _ = app.update(Message::OpenTrip(2026));
        let _ = app.update(Message::PhotoActivated(1));
        let _ = app.update(Message::Lightbox(LightboxInput::Key(NavKey::Right)));
        assert_eq!(trip_page(&app).lightbox().current(), Some(2));

        let _ = app.update(Message::Lightbox(LightboxInput::Backdrop));
        assert!(!trip_page(&app).lightbox().is_open());
    }
}
