/// Lightbox navigation state
///
/// `Closed` or `Open(index)` over a gallery of `len` photos, with
/// circular next/previous. Keyboard, click and swipe input all funnel
/// through [`Lightbox::handle`].
use tracing::debug;

use super::data::Photo;
use super::gallery::Gallery;

/// Horizontal displacement a drag must exceed to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightboxInput {
    Next,
    Previous,
    /// Close control
    Close,
    /// Click on the backdrop around the image
    Backdrop,
    Key(NavKey),
    /// Pointer or finger went down over the image at this x
    SwipeStart(f32),
    /// Pointer or finger was released at this x
    SwipeEnd(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged leftward: show the next photo
    Next,
    /// Dragged rightward: show the previous photo
    Previous,
}

/// Classify a horizontal drag. Displacements up to the threshold are taps.
pub fn classify_swipe(start_x: f32, end_x: f32) -> Option<SwipeDirection> {
    let delta = start_x - end_x;
    if delta > SWIPE_THRESHOLD {
        Some(SwipeDirection::Next)
    } else if delta < -SWIPE_THRESHOLD {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
    len: usize,
    swipe_start: Option<f32>,
}

impl Lightbox {
    /// A closed lightbox over a gallery of `len` photos
    pub fn new(len: usize) -> Self {
        Self {
            state: LightboxState::Closed,
            len,
            swipe_start: None,
        }
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }

    /// Open at a known gallery index. Out-of-range indices open the first
    /// photo; an empty gallery never opens.
    pub fn open_at(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let index = if index < self.len { index } else { 0 };
        self.swipe_start = None;
        self.state = LightboxState::Open(index);
        debug!(index, total = self.len, "lightbox opened");
    }

    /// Open by content. Photos that are not in the gallery open at index 0.
    pub fn open_photo(&mut self, gallery: &Gallery, photo: &Photo) {
        let index = gallery.index_of(photo).unwrap_or_else(|| {
            debug!(src = %photo.src, "photo not in gallery, opening first photo");
            0
        });
        self.open_at(index);
    }

    pub fn next(&mut self) {
        if let (LightboxState::Open(index), Some(len)) = (self.state, self.nonzero_len()) {
            self.state = LightboxState::Open((index + 1) % len);
        }
    }

    pub fn previous(&mut self) {
        if let (LightboxState::Open(index), Some(len)) = (self.state, self.nonzero_len()) {
            self.state = LightboxState::Open((index + len - 1) % len);
        }
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
        self.swipe_start = None;
    }

    /// Apply one input event. Ignored entirely while closed.
    pub fn handle(&mut self, input: LightboxInput) {
        if !self.is_open() {
            return;
        }

        match input {
            LightboxInput::Next | LightboxInput::Key(NavKey::Right) => self.next(),
            LightboxInput::Previous | LightboxInput::Key(NavKey::Left) => self.previous(),
            LightboxInput::Close | LightboxInput::Backdrop | LightboxInput::Key(NavKey::Escape) => {
                self.close()
            }
            LightboxInput::SwipeStart(x) => self.swipe_start = Some(x),
            LightboxInput::SwipeEnd(x) => {
                let Some(start) = self.swipe_start.take() else {
                    return;
                };
                match classify_swipe(start, x) {
                    Some(SwipeDirection::Next) => self.next(),
                    Some(SwipeDirection::Previous) => self.previous(),
                    None => {}
                }
            }
        }
    }

    /// "position / total", 1-based
    pub fn position_label(&self) -> Option<String> {
        self.current()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }

    fn nonzero_len(&self) -> Option<usize> {
        (self.len > 0).then_some(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::aggregate;
    use crate::state::gallery::tests::{photo, scenario_trip};

    fn open(len: usize, index: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(len);
        lightbox.open_at(index);
        lightbox
    }

    #[test]
    fn test_next_wraps_after_n_steps() {
        for len in 1..6 {
            for start in 0..len {
                let mut lightbox = open(len, start);
                for _ in 0..len {
                    lightbox.next();
                }
                assert_eq!(lightbox.current(), Some(start));
            }
        }
    }

    #[test]
    fn test_previous_wraps_after_n_steps() {
        for len in 1..6 {
            for start in 0..len {
                let mut lightbox = open(len, start);
                for _ in 0..len {
                    lightbox.previous();
                }
                assert_eq!(lightbox.current(), Some(start));
            }
        }
    }

    #[test]
    fn test_next_and_previous_are_inverse() {
        for start in 0..4 {
            let mut lightbox = open(4, start);
            lightbox.next();
            lightbox.previous();
            assert_eq!(lightbox.current(), Some(start));

            lightbox.previous();
            lightbox.next();
            assert_eq!(lightbox.current(), Some(start));
        }
    }

    #[test]
    fn test_wraps_at_edges() {
        let mut lightbox = open(3, 2);
        lightbox.next();
        assert_eq!(lightbox.current(), Some(0));
        lightbox.previous();
        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn test_swipe_threshold() {
        let mut lightbox = open(5, 2);

        lightbox.handle(LightboxInput::SwipeStart(200.0));
        lightbox.handle(LightboxInput::SwipeEnd(150.0));
        assert_eq!(lightbox.current(), Some(2));

        lightbox.handle(LightboxInput::SwipeStart(150.0));
        lightbox.handle(LightboxInput::SwipeEnd(200.0));
        assert_eq!(lightbox.current(), Some(2));

        lightbox.handle(LightboxInput::SwipeStart(200.0));
        lightbox.handle(LightboxInput::SwipeEnd(149.0));
        assert_eq!(lightbox.current(), Some(3));

        lightbox.handle(LightboxInput::SwipeStart(149.0));
        lightbox.handle(LightboxInput::SwipeEnd(200.0));
        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn test_swipe_end_without_start_is_ignored() {
        let mut lightbox = open(5, 1);
        lightbox.handle(LightboxInput::SwipeEnd(0.0));
        assert_eq!(lightbox.current(), Some(1));
    }

    #[test]
    fn test_keys() {
        let mut lightbox = open(3, 0);

        lightbox.handle(LightboxInput::Key(NavKey::Left));
        assert_eq!(lightbox.current(), Some(2));
        lightbox.handle(LightboxInput::Key(NavKey::Right));
        assert_eq!(lightbox.current(), Some(0));
        lightbox.handle(LightboxInput::Key(NavKey::Escape));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_close_inputs() {
        for input in [LightboxInput::Close, LightboxInput::Backdrop] {
            let mut lightbox = open(3, 1);
            lightbox.handle(input);
            assert!(!lightbox.is_open());
        }
    }

    #[test]
    fn test_input_ignored_while_closed() {
        let mut lightbox = Lightbox::new(3);
        lightbox.handle(LightboxInput::Next);
        lightbox.next();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0);
        lightbox.open_at(0);
        lightbox.next();
        lightbox.previous();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.position_label(), None);
    }

    #[test]
    fn test_open_out_of_range_falls_back_to_first() {
        let lightbox = open(3, 7);
        assert_eq!(lightbox.current(), Some(0));
    }

    #[test]
    fn test_open_unknown_photo_falls_back_to_first() {
        let gallery = aggregate(&scenario_trip());
        let mut lightbox = Lightbox::new(gallery.len());

        lightbox.open_photo(&gallery, &photo("not-in-this-trip"));

        assert_eq!(lightbox.current(), Some(0));
    }

    #[test]
    fn test_scenario_navigation() {
        let gallery = aggregate(&scenario_trip());
        let mut lightbox = Lightbox::new(gallery.len());

        lightbox.open_photo(&gallery, &photo("course-0"));
        assert_eq!(lightbox.current(), Some(2));
        lightbox.next();
        lightbox.next();
        assert_eq!(lightbox.current(), Some(4));
        assert_eq!(gallery.get(4).map(|e| e.photo.src.as_str()), Some("course-2"));

        lightbox.open_photo(&gallery, &photo("course-1"));
        lightbox.next();
        lightbox.next();
        assert_eq!(lightbox.current(), Some(5));
        assert_eq!(gallery.get(5).map(|e| e.photo.src.as_str()), Some("activity-0"));
        assert_eq!(lightbox.position_label().as_deref(), Some("6 / 6"));
    }
}
