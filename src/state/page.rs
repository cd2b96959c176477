/// UI selection state of one trip page view
///
/// Created when a trip page is opened and dropped when the user leaves it.
/// Holds the trip's gallery plus everything the user can open on the page.
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::data::{Photo, Trip};
use super::expand::{ActivityKey, CourseKey, DayKey, ExpandState};
use super::gallery::{aggregate, Gallery};
use super::lightbox::{Lightbox, LightboxInput};
use super::scroll::{RestorePhase, RestoreTicket, ScrollKeeper, ScrollOffset};
use crate::photo::thumbnail::{resolve, PhotoLocation};

/// What the shell must schedule after a layout-changing toggle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestorePlan {
    pub ticket: RestoreTicket,
    /// Offset to apply right after the state change
    pub immediate: Option<ScrollOffset>,
}

/// What can be drawn for one gallery photo
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoSlot {
    /// Remote source or missing file; drawn as an alt-text placeholder
    Unavailable,
    /// Original on disk, thumbnail not generated yet
    Original(PathBuf),
    Thumbnail { original: PathBuf, thumbnail: PathBuf },
    /// The original could not be decoded
    Failed,
}

impl PhotoSlot {
    fn resolve(photo_root: &Path, photo: &Photo) -> Self {
        match resolve(photo_root, &photo.src) {
            PhotoLocation::Local(path) if path.is_file() => PhotoSlot::Original(path),
            PhotoLocation::Local(path) => {
                warn!("⚠️  Photo not found: {}", path.display());
                PhotoSlot::Unavailable
            }
            PhotoLocation::Remote(_) => PhotoSlot::Unavailable,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TripPage {
    pub year: u16,
    gallery: Gallery,
    lightbox: Lightbox,
    expand: ExpandState,
    scroll: ScrollKeeper,
    slots: Vec<PhotoSlot>,
}

impl TripPage {
    pub fn new(trip: &Trip, photo_root: &Path) -> Self {
        let gallery = aggregate(trip);
        let slots = gallery
            .entries()
            .iter()
            .map(|entry| PhotoSlot::resolve(photo_root, &entry.photo))
            .collect();
        debug!(year = trip.year, photos = gallery.len(), "trip page opened");

        Self {
            year: trip.year,
            lightbox: Lightbox::new(gallery.len()),
            slots,
            gallery,
            expand: ExpandState::default(),
            scroll: ScrollKeeper::new(),
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn expand(&self) -> &ExpandState {
        &self.expand
    }

    pub fn scroll(&self) -> &ScrollKeeper {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollKeeper {
        &mut self.scroll
    }

    pub fn toggle_day(&mut self, key: DayKey) -> RestorePlan {
        let ticket = self.scroll.capture();
        let open = self.expand.days.toggle(key);
        debug!(open, "day toggled");
        self.plan(ticket)
    }

    pub fn toggle_course(&mut self, key: CourseKey) -> RestorePlan {
        let ticket = self.scroll.capture();
        let open = self.expand.courses.toggle(key);
        debug!(open, "course toggled");
        self.plan(ticket)
    }

    pub fn toggle_activity(&mut self, key: ActivityKey) {
        self.expand.activities.toggle(key);
    }

    /// Thumbnail click; thumbnails carry their gallery index
    pub fn activate_photo(&mut self, index: usize) {
        self.lightbox.open_at(index);
    }

    /// Open by content when no index is known
    pub fn select_photo(&mut self, photo: &Photo) {
        self.lightbox.open_photo(&self.gallery, photo);
    }

    pub fn lightbox_input(&mut self, input: LightboxInput) {
        self.lightbox.handle(input);
    }

    /// Originals that still need a thumbnail, by gallery index
    pub fn thumbnail_jobs(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                PhotoSlot::Original(path) => Some((index, path.as_path())),
                _ => None,
            })
    }

    pub fn slot(&self, index: usize) -> Option<&PhotoSlot> {
        self.slots.get(index)
    }

    /// Image for a grid tile: the thumbnail once ready, the original until then
    pub fn tile_image(&self, index: usize) -> Option<&Path> {
        match self.slots.get(index)? {
            PhotoSlot::Thumbnail { thumbnail, .. } => Some(thumbnail.as_path()),
            PhotoSlot::Original(path) => Some(path.as_path()),
            PhotoSlot::Unavailable | PhotoSlot::Failed => None,
        }
    }

    /// Full-size image for the lightbox
    pub fn full_image(&self, index: usize) -> Option<&Path> {
        match self.slots.get(index)? {
            PhotoSlot::Thumbnail { original, .. } | PhotoSlot::Original(original) => {
                Some(original.as_path())
            }
            PhotoSlot::Unavailable | PhotoSlot::Failed => None,
        }
    }

    /// Apply a finished thumbnail job
    pub fn set_thumbnail(&mut self, index: usize, result: Result<PathBuf, String>) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        let PhotoSlot::Original(original) = slot else {
            return;
        };
        let original = original.clone();

        *slot = match result {
            Ok(thumbnail) => PhotoSlot::Thumbnail { original, thumbnail },
            Err(err) => {
                warn!("⚠️  Thumbnail failed for {}: {}", original.display(), err);
                PhotoSlot::Failed
            }
        };
    }

    /// The page is being left; pending scroll restores become no-ops
    pub fn teardown(&mut self) {
        self.scroll.teardown();
        self.lightbox.close();
    }

    fn plan(&mut self, ticket: RestoreTicket) -> RestorePlan {
        RestorePlan {
            ticket,
            immediate: self.scroll.restore(ticket, RestorePhase::Immediate),
        }
    }
}
