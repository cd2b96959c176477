use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid trip data in {source_name}: {source}")]
    TripData {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("trip {0} is defined more than once")]
    DuplicateTrip(u16),
    #[error("no trips found")]
    NoTrips,
    #[error("could not decode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Gui(#[from] iced::Error),
}
