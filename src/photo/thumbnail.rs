use image::imageops::FilterType;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::AppError;

/// Longest edge of generated thumbnails
const THUMBNAIL_SIZE: u32 = 480;

/// Where a photo's pixels come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoLocation {
    /// A file on disk
    Local(PathBuf),
    /// Anything with a URI scheme; shown as a placeholder
    Remote(String),
}

/// Resolve a photo `src` against the photo root
pub fn resolve(photo_root: &Path, src: &str) -> PhotoLocation {
    if src.contains("://") {
        return PhotoLocation::Remote(src.to_string());
    }

    let path = Path::new(src);
    if path.is_absolute() {
        PhotoLocation::Local(path.to_path_buf())
    } else {
        PhotoLocation::Local(photo_root.join(path))
    }
}

/// Cache file for a photo source.
///
/// The full source path is escaped byte by byte: ASCII letters, digits and
/// `-` stay, every other byte becomes `_` plus two hex digits. The escape is
/// reversible, so distinct sources never share a cache file.
pub fn thumbnail_path(cache_dir: &Path, source: &Path) -> PathBuf {
    let mut key = String::new();
    for &byte in source.as_os_str().as_encoded_bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            key.push(byte as char);
        } else {
            let _ = write!(key, "_{:02x}", byte);
        }
    }
    cache_dir.join(format!("{}.jpg", key))
}

/// Generate (or reuse) the cached thumbnail for `source`
/// Runs on the blocking pool; errors come back as strings so they can
/// travel inside UI messages.
pub async fn generate_thumbnail(source: PathBuf, cache_dir: PathBuf) -> Result<PathBuf, String> {
    tokio::task::spawn_blocking(move || {
        generate_thumbnail_blocking(&source, &cache_dir).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

fn generate_thumbnail_blocking(source: &Path, cache_dir: &Path) -> Result<PathBuf, AppError> {
    let target = thumbnail_path(cache_dir, source);
    if is_fresh(&target, source) {
        return Ok(target);
    }

    fs::create_dir_all(cache_dir)?;

    let img = image::open(source).map_err(|err| AppError::Image {
        path: source.to_path_buf(),
        source: err,
    })?;
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    // JPEG has no alpha channel
    thumbnail
        .to_rgb8()
        .save(&target)
        .map_err(|err| AppError::Image {
            path: target.clone(),
            source: err,
        })?;

    debug!("📸 Generated thumbnail: {}", target.display());
    Ok(target)
}

/// A cached thumbnail is reused unless the source changed after it was written
fn is_fresh(target: &Path, source: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();
    match (modified(target), modified(source)) {
        (Some(thumb), Some(original)) => thumb >= original,
        (Some(_), None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_resolve() {
        let root = Path::new("/srv/photos");

        assert_eq!(
            resolve(root, "2026/house.jpg"),
            PhotoLocation::Local(PathBuf::from("/srv/photos/2026/house.jpg"))
        );
        assert_eq!(
            resolve(root, "/abs/house.jpg"),
            PhotoLocation::Local(PathBuf::from("/abs/house.jpg"))
        );
        assert_eq!(
            resolve(root, "https://example.com/a.jpg"),
            PhotoLocation::Remote("https://example.com/a.jpg".into())
        );
    }

    #[test]
    fn test_thumbnail_path_is_flat() {
        let path = thumbnail_path(Path::new("/cache"), Path::new("photos/2026/a b.jpg"));
        assert_eq!(path, PathBuf::from("/cache/photos_2f2026_2fa_20b_2ejpg.jpg"));
    }

    #[test]
    fn test_similar_names_get_separate_cache_files() {
        let cache = Path::new("/cache");
        let names = ["a b.png", "a_b.png", "a/b.png", "a.b.png", "a_20b.png"];

        let paths: Vec<PathBuf> = names
            .iter()
            .map(|name| thumbnail_path(cache, Path::new(name)))
            .collect();

        for (i, left) in paths.iter().enumerate() {
            for right in &paths[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn test_similar_names_keep_their_own_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let red = dir.path().join("a b.png");
        let blue = dir.path().join("a_b.png");
        RgbImage::from_pixel(64, 64, Rgb([255, 0, 0])).save(&red).unwrap();
        RgbImage::from_pixel(64, 64, Rgb([0, 0, 255])).save(&blue).unwrap();
        let cache = dir.path().join("cache");

        let red_thumb = generate_thumbnail_blocking(&red, &cache).unwrap();
        let blue_thumb = generate_thumbnail_blocking(&blue, &cache).unwrap();

        assert_ne!(red_thumb, blue_thumb);
        let pixel = image::open(&blue_thumb).unwrap().to_rgb8().get_pixel(10, 10).0;
        assert!(pixel[2] > 200 && pixel[0] < 50, "unexpected pixel {:?}", pixel);
    }

    #[test]
    fn test_generate_thumbnail_downsizes_and_reuses() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("wide.png");
        RgbImage::from_pixel(1200, 600, Rgb([20, 120, 60])).save(&source).unwrap();
        let cache = dir.path().join("cache");

        let first = generate_thumbnail_blocking(&source, &cache).unwrap();
        let (width, height) = image::image_dimensions(&first).unwrap();
        assert_eq!((width, height), (480, 240));

        let second = generate_thumbnail_blocking(&source, &cache).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_source_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_thumbnail_blocking(&dir.path().join("none.jpg"), dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Image { .. }));
    }
}
