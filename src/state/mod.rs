/// State management module
///
/// This module handles all application state, including:
/// - Trip data structures (data.rs)
/// - The trip catalog (catalog.rs)
/// - Photo aggregation into one gallery per trip (gallery.rs)
/// - Lightbox navigation (lightbox.rs)
/// - Expand/collapse selection and scroll preservation (expand.rs, scroll.rs)
/// - Per-page UI state tying the above together (page.rs)

pub mod catalog;
pub mod data;
pub mod expand;
pub mod gallery;
pub mod lightbox;
pub mod page;
pub mod scroll;
