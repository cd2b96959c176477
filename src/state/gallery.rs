/// Flat photo sequence for one trip
///
/// Photos are scattered over the accommodation, the courses and the
/// activities of a trip. The gallery walks them in page order and gives
/// every photo a stable global index, which is what the lightbox
/// navigates over and what every thumbnail carries.
use super::data::{Photo, Trip};

/// Where in the trip a gallery photo was authored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoOrigin {
    Accommodation { position: usize },
    Course { day: usize, course: usize, position: usize },
    Activity { day: usize, activity: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub photo: Photo,
    pub origin: PhotoOrigin,
}

/// Ordered photo sequence; identity is the position in `entries`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

/// Collect every photo of a trip in navigation order:
/// accommodation photos, then course photos day by day, then activity
/// photos day by day. Duplicates are kept at their own positions.
pub fn aggregate(trip: &Trip) -> Gallery {
    let mut entries = Vec::new();

    for (position, photo) in trip.accommodation.photos.iter().enumerate() {
        entries.push(GalleryEntry {
            photo: photo.clone(),
            origin: PhotoOrigin::Accommodation { position },
        });
    }

    for (day, schedule) in trip.schedule.iter().enumerate() {
        for (course, golf_course) in schedule.courses.iter().enumerate() {
            for (position, photo) in golf_course.photos.iter().enumerate() {
                entries.push(GalleryEntry {
                    photo: photo.clone(),
                    origin: PhotoOrigin::Course { day, course, position },
                });
            }
        }
    }

    for (day, schedule) in trip.schedule.iter().enumerate() {
        for (activity, item) in schedule.activities.iter().enumerate() {
            if let Some(photo) = &item.photo {
                entries.push(GalleryEntry {
                    photo: photo.clone(),
                    origin: PhotoOrigin::Activity { day, activity },
                });
            }
        }
    }

    Gallery { entries }
}

impl Gallery {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    /// Index assigned to the photo authored at `origin`
    pub fn index_for(&self, origin: PhotoOrigin) -> Option<usize> {
        self.entries.iter().position(|entry| entry.origin == origin)
    }

    /// First index whose photo is structurally equal to `photo`
    pub fn index_of(&self, photo: &Photo) -> Option<usize> {
        self.entries.iter().position(|entry| entry.photo == *photo)
    }
}
