/// Jump links to the main sections of the trip page
///
/// Every section is a container with a fixed id. To jump, a widget
/// operation walks the tree once and reads the layout bounds of the
/// section and of the page's scrollable content. Layout bounds are not
/// clipped by the viewport, so sections below the fold are found too.
use iced::advanced::widget::operation::{Outcome, Scrollable};
use iced::advanced::widget::{self, Operation};
use iced::widget::{container, scrollable};
use iced::{Rectangle, Task, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Accommodation,
    Schedule,
    Courses,
    Food,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Accommodation,
        Section::Schedule,
        Section::Courses,
        Section::Food,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Accommodation => "Overnatting",
            Section::Schedule => "Program",
            Section::Courses => "Golfbaner",
            Section::Food => "Mat",
        }
    }

    pub fn id(self) -> container::Id {
        container::Id::new(match self {
            Section::Accommodation => "section-accommodation",
            Section::Schedule => "section-schedule",
            Section::Courses => "section-courses",
            Section::Food => "section-food",
        })
    }
}

/// Vertical offset of `section` inside the content of `scroll_area`.
///
/// Produces nothing when either widget is not part of the current layout.
pub fn locate(section: Section, scroll_area: scrollable::Id) -> Task<f32> {
    widget::operate(SectionOffset::new(section.id().into(), scroll_area.into()))
}

struct SectionOffset {
    section: widget::Id,
    scroll_area: widget::Id,
    content: Option<Rectangle>,
    target: Option<Rectangle>,
}

impl SectionOffset {
    fn new(section: widget::Id, scroll_area: widget::Id) -> Self {
        Self {
            section,
            scroll_area,
            content: None,
            target: None,
        }
    }
}

impl Operation<f32> for SectionOffset {
    fn container(
        &mut self,
        id: Option<&widget::Id>,
        bounds: Rectangle,
        operate_on_children: &mut dyn FnMut(&mut dyn Operation<f32>),
    ) {
        if self.target.is_some() {
            return;
        }
        if id == Some(&self.section) {
            self.target = Some(bounds);
            return;
        }
        operate_on_children(self);
    }

    fn scrollable(
        &mut self,
        _state: &mut dyn Scrollable,
        id: Option<&widget::Id>,
        _bounds: Rectangle,
        content_bounds: Rectangle,
        _translation: Vector,
    ) {
        if id == Some(&self.scroll_area) {
            self.content = Some(content_bounds);
        }
    }

    fn finish(&self) -> Outcome<f32> {
        match (self.content, self.target) {
            (Some(content), Some(target)) => Outcome::Some(offset_within(content, target)),
            _ => Outcome::None,
        }
    }
}

/// Scroll offset that puts the top of `section` at the top of the viewport
fn offset_within(content: Rectangle, section: Rectangle) -> f32 {
    (section.y - content.y).max(0.0)
}
