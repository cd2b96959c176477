/// Photo file handling
///
/// This module handles:
/// - Resolving authored photo sources against the photo root
/// - Generating thumbnails off the UI thread
/// - Caching thumbnails to disk

pub mod thumbnail;
