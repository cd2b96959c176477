/// Expand/collapse selection for the trip page
///
/// Each category (day, course, activity) has at most one open panel.
/// Categories are independent of each other.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayKey(pub String);

/// Course names are only unique within a day; the same course can be
/// played on two days
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseKey {
    pub date: String,
    pub name: String,
}

/// Activities have no unique name, so they are keyed by day and position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityKey {
    pub date: String,
    pub index: usize,
}

/// Single-selection toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle<K> {
    open: Option<K>,
}

impl<K> Default for Toggle<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> Toggle<K> {
    /// Close `key` if it is open, otherwise make it the open one.
    /// Returns whether `key` is open afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.open.as_ref() == Some(&key) {
            self.open = None;
            false
        } else {
            self.open = Some(key);
            true
        }
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpandState {
    pub days: Toggle<DayKey>,
    pub courses: Toggle<CourseKey>,
    pub activities: Toggle<ActivityKey>,
}
