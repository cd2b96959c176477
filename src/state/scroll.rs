/// Scroll offset preservation across expand/collapse
///
/// Opening or closing a panel changes the height of the page content and
/// can make the viewport jump. Before the change the keeper captures the
/// current offset; afterwards the page asks it for the offset to restore
/// at three points (immediately, after the next frame, after a short
/// delay). While a restore is pending, a content-height change reported
/// by the scrollable triggers a correction right away.
///
/// This is best effort: a late image load after the delay can still move
/// content.

use std::sync::atomic::{AtomicU64, Ordering};

/// Offsets closer than this are treated as equal
const EPSILON: f32 = 0.5;

/// Shared by every keeper, so a ticket never repeats across pages
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    fn approx_eq(&self, other: &ScrollOffset) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePhase {
    Immediate,
    NextFrame,
    Delayed,
}

/// Identifies one capture; attempts from older captures, or from another
/// page's keeper, are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreTicket(u64);

#[derive(Debug, Clone)]
struct PendingRestore {
    ticket: RestoreTicket,
    offset: ScrollOffset,
    frame_done: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollKeeper {
    offset: ScrollOffset,
    content_height: f32,
    pending: Option<PendingRestore>,
    active: bool,
}

impl Default for ScrollKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollKeeper {
    pub fn new() -> Self {
        Self {
            offset: ScrollOffset::default(),
            content_height: 0.0,
            pending: None,
            active: true,
        }
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Record a viewport report from the scrollable.
    ///
    /// Returns an offset to scroll back to when the content height changed
    /// underneath a pending restore.
    pub fn observe(&mut self, offset: ScrollOffset, content_height: f32) -> Option<ScrollOffset> {
        if !self.active {
            return None;
        }

        let height_changed = (content_height - self.content_height).abs() >= EPSILON;
        self.content_height = content_height;

        if let Some(pending) = self.pending.as_ref() {
            if offset.approx_eq(&pending.offset) {
                return None;
            }
            if height_changed {
                return Some(pending.offset);
            }
            // Same layout, different offset: the user scrolled, stop fighting them
            self.pending = None;
        }

        self.offset = offset;
        None
    }

    /// Capture the current offset just before a layout-changing update
    pub fn capture(&mut self) -> RestoreTicket {
        let ticket = RestoreTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        self.pending = Some(PendingRestore {
            ticket,
            offset: self.offset,
            frame_done: false,
        });
        ticket
    }

    /// Offset to apply for this attempt, or `None` when the attempt is stale
    pub fn restore(&mut self, ticket: RestoreTicket, phase: RestorePhase) -> Option<ScrollOffset> {
        if !self.active {
            return None;
        }
        let pending = self.pending.as_mut().filter(|p| p.ticket == ticket)?;

        match phase {
            RestorePhase::Immediate => Some(pending.offset),
            RestorePhase::NextFrame => {
                if pending.frame_done {
                    None
                } else {
                    pending.frame_done = true;
                    Some(pending.offset)
                }
            }
            RestorePhase::Delayed => self.pending.take().map(|p| p.offset),
        }
    }

    /// Ticket still waiting for its next-frame attempt
    pub fn awaiting_frame(&self) -> Option<RestoreTicket> {
        self.pending
            .as_ref()
            .filter(|p| !p.frame_done)
            .map(|p| p.ticket)
    }

    /// The page went away; every later attempt is a no-op
    pub fn teardown(&mut self) {
        self.active = false;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: f32) -> ScrollOffset {
        ScrollOffset { x: 0.0, y }
    }

    #[test]
    fn test_all_three_attempts_restore_captured_offset() {
        let mut keeper = ScrollKeeper::new();
        keeper.observe(at(640.0), 3000.0);

        let ticket = keeper.capture();

        assert_eq!(keeper.restore(ticket, RestorePhase::Immediate), Some(at(640.0)));
        assert_eq!(keeper.awaiting_frame(), Some(ticket));
        assert_eq!(keeper.restore(ticket, RestorePhase::NextFrame), Some(at(640.0)));
        assert_eq!(keeper.awaiting_frame(), None);
        assert_eq!(keeper.restore(ticket, RestorePhase::NextFrame), None);
        assert_eq!(keeper.restore(ticket, RestorePhase::Delayed), Some(at(640.0)));
        assert_eq!(keeper.restore(ticket, RestorePhase::Delayed), None);
    }

    #[test]
    fn test_older_ticket_is_stale() {
        let mut keeper = ScrollKeeper::new();
        keeper.observe(at(100.0), 2000.0);
        let first = keeper.capture();
        let second = keeper.capture();

        assert_eq!(keeper.restore(first, RestorePhase::Delayed), None);
        assert_eq!(keeper.restore(second, RestorePhase::Delayed), Some(at(100.0)));
    }

    #[test]
    fn test_teardown_makes_attempts_noops() {
        let mut keeper = ScrollKeeper::new();
        keeper.observe(at(100.0), 2000.0);
        let ticket = keeper.capture();

        keeper.teardown();

        assert_eq!(keeper.restore(ticket, RestorePhase::Immediate), None);
        assert_eq!(keeper.restore(ticket, RestorePhase::Delayed), None);
        assert_eq!(keeper.observe(at(0.0), 100.0), None);
        assert_eq!(keeper.awaiting_frame(), None);
    }

    #[test]
    fn test_layout_change_while_pending_is_corrected() {
        let mut keeper = ScrollKeeper::new();
        keeper.observe(at(900.0), 4000.0);
        keeper.capture();

        // Panel above collapsed and the scrollable clamped the offset
        assert_eq!(keeper.observe(at(700.0), 3200.0), Some(at(900.0)));
        // Our correction landed
        assert_eq!(keeper.observe(at(900.0), 3200.0), None);
        // An image inside the panel finished loading
        assert_eq!(keeper.observe(at(750.0), 3400.0), Some(at(900.0)));
    }

    #[test]
    fn test_user_scroll_cancels_pending_restore() {
        let mut keeper = ScrollKeeper::new();
        keeper.observe(at(300.0), 2000.0);
        let ticket = keeper.capture();

        assert_eq!(keeper.observe(at(500.0), 2000.0), None);

        assert_eq!(keeper.offset(), at(500.0));
        assert_eq!(keeper.restore(ticket, RestorePhase::Delayed), None);
    }

    #[test]
    fn test_observe_without_pending_tracks_offset() {
        let mut keeper = ScrollKeeper::new();
        assert_eq!(keeper.observe(at(42.0), 1000.0), None);
        assert_eq!(keeper.offset(), at(42.0));
    }

    #[test]
    fn test_ticket_from_previous_page_is_stale() {
        let mut old_page = ScrollKeeper::new();
        old_page.observe(at(1200.0), 5000.0);
        let old_ticket = old_page.capture();
        old_page.teardown();

        let mut new_page = ScrollKeeper::new();
        new_page.observe(at(80.0), 3000.0);
        let new_ticket = new_page.capture();

        assert_ne!(old_ticket, new_ticket);
        assert_eq!(new_page.restore(old_ticket, RestorePhase::Delayed), None);
        assert_eq!(new_page.restore(new_ticket, RestorePhase::Delayed), Some(at(80.0)));
    }
}
