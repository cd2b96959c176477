use std::{env, path::PathBuf, time::Duration};

use crate::error::AppError;

/// Fallback delay for the last scroll-restore attempt
const DEFAULT_RESTORE_DELAY_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Extra trip files; a trip here replaces the bundled trip of the same year
    pub data_dir: Option<PathBuf>,
    /// Base directory for relative photo paths
    pub photo_root: PathBuf,
    pub cache_dir: PathBuf,
    pub restore_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let data_dir = lookup("GOLFTUR_DATA_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let photo_root = lookup("GOLFTUR_PHOTO_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"));

        let cache_dir = match lookup("GOLFTUR_CACHE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_cache_dir()?,
        };

        let restore_delay = match lookup("GOLFTUR_RESTORE_DELAY_MS") {
            Some(value) => value.trim().parse::<u64>().map_err(|err| {
                AppError::Config(format!("invalid GOLFTUR_RESTORE_DELAY_MS: {err}"))
            })?,
            None => DEFAULT_RESTORE_DELAY_MS,
        };

        Ok(Self {
            data_dir,
            photo_root,
            cache_dir,
            restore_delay: Duration::from_millis(restore_delay),
        })
    }
}

/// ~/.cache/golftur/thumbnails on Linux
fn default_cache_dir() -> Result<PathBuf, AppError> {
    let mut path = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| AppError::Config("could not determine cache directory".into()))?;

    path.push("golftur");
    path.push("thumbnails");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("GOLFTUR_CACHE_DIR", "/tmp/golftur")]).unwrap();

        assert_eq!(config.data_dir, None);
        assert_eq!(config.photo_root, PathBuf::from("assets"));
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/golftur"));
        assert_eq!(config.restore_delay, Duration::from_millis(50));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("GOLFTUR_DATA_DIR", "/srv/trips"),
            ("GOLFTUR_PHOTO_ROOT", "/srv/photos"),
            ("GOLFTUR_CACHE_DIR", "/tmp/golftur"),
            ("GOLFTUR_RESTORE_DELAY_MS", "80"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/trips")));
        assert_eq!(config.photo_root, PathBuf::from("/srv/photos"));
        assert_eq!(config.restore_delay, Duration::from_millis(80));
    }

    #[test]
    fn test_invalid_delay_is_config_error() {
        let err = config(&[
            ("GOLFTUR_CACHE_DIR", "/tmp/golftur"),
            ("GOLFTUR_RESTORE_DELAY_MS", "soon"),
        ])
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }
}
