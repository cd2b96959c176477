use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::data::Trip;
use crate::error::AppError;

/// Trips compiled into the binary
const BUNDLED: &[(&str, &str)] = &[
    ("bundled 2026.json", include_str!("../../assets/trips/2026.json")),
    ("bundled 2025.json", include_str!("../../assets/trips/2025.json")),
];

/// The Catalog holds every known trip, newest year first.
///
/// Bundled trips are always present; a data directory can add trips or
/// replace a bundled trip by using the same year.
#[derive(Debug, Clone)]
pub struct Catalog {
    trips: Vec<Trip>,
}

impl Catalog {
    /// Load the bundled trips and overlay the optional data directory
    pub fn load(data_dir: Option<&Path>) -> Result<Self, AppError> {
        let mut trips = BUNDLED
            .iter()
            .map(|(name, json)| parse_trip(name, json))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(dir) = data_dir {
            for trip in load_dir(dir)? {
                match trips.iter_mut().find(|t| t.year == trip.year) {
                    Some(existing) => {
                        info!("📁 Trip {} replaced from {}", trip.year, dir.display());
                        *existing = trip;
                    }
                    None => trips.push(trip),
                }
            }
        }

        Self::from_trips(trips)
    }

    pub fn from_trips(mut trips: Vec<Trip>) -> Result<Self, AppError> {
        if trips.is_empty() {
            return Err(AppError::NoTrips);
        }

        trips.sort_by(|a, b| b.year.cmp(&a.year));
        if let Some(pair) = trips.windows(2).find(|pair| pair[0].year == pair[1].year) {
            return Err(AppError::DuplicateTrip(pair[0].year));
        }

        info!("✅ Catalog loaded with {} trips", trips.len());
        Ok(Self { trips })
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn get(&self, year: u16) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.year == year)
    }

    /// The newest trip
    pub fn latest(&self) -> &Trip {
        // from_trips guarantees at least one trip, sorted newest first
        &self.trips[0]
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter().filter(|trip| trip.is_upcoming)
    }

    pub fn past(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter().filter(|trip| !trip.is_upcoming)
    }
}

fn parse_trip(source_name: &str, json: &str) -> Result<Trip, AppError> {
    serde_json::from_str(json).map_err(|source| AppError::TripData {
        source_name: source_name.to_string(),
        source,
    })
}

/// Every `*.json` file below `dir`, in file name order
fn load_dir(dir: &Path) -> Result<Vec<Trip>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::Config(format!(
            "trip data directory {} does not exist",
            dir.display()
        )));
    }

    let mut trips: Vec<Trip> = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("⚠️  Skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_json = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            continue;
        }

        let json = fs::read_to_string(path)?;
        let trip = parse_trip(&path.display().to_string(), &json)?;
        if trips.iter().any(|t| t.year == trip.year) {
            return Err(AppError::DuplicateTrip(trip.year));
        }
        debug!("Loaded trip {} from {}", trip.year, path.display());
        trips.push(trip);
    }

    Ok(trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::tests::empty_trip;

    fn trip(year: u16, upcoming: bool) -> Trip {
        let mut trip = empty_trip();
        trip.year = year;
        trip.is_upcoming = upcoming;
        trip
    }

    #[test]
    fn test_bundled_trips_parse() {
        let catalog = Catalog::load(None).unwrap();

        assert_eq!(catalog.latest().year, 2026);
        assert!(catalog.get(2025).is_some());
        assert_eq!(catalog.upcoming().map(|t| t.year).collect::<Vec<_>>(), vec![2026]);
        assert_eq!(catalog.past().map(|t| t.year).collect::<Vec<_>>(), vec![2025]);
    }

    #[test]
    fn test_sorted_newest_first() {
        let catalog =
            Catalog::from_trips(vec![trip(2024, false), trip(2026, true), trip(2025, false)]).unwrap();

        let years: Vec<u16> = catalog.trips().iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2026, 2025, 2024]);
    }

    #[test]
    fn test_duplicate_year_is_rejected() {
        let err = Catalog::from_trips(vec![trip(2026, true), trip(2026, false)]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateTrip(2026)));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(Catalog::from_trips(Vec::new()), Err(AppError::NoTrips)));
    }

    #[test]
    fn test_data_dir_adds_and_replaces() {
        let dir = tempfile::tempdir().unwrap();

        let mut replacement = trip(2025, false);
        replacement.title = "Irland".into();
        fs::write(dir.path().join("2025.json"), serde_json::to_string(&replacement).unwrap()).unwrap();

        let nested = dir.path().join("archive");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("2019.json"), serde_json::to_string(&trip(2019, false)).unwrap()).unwrap();
        fs::write(nested.join("notes.txt"), "ignored").unwrap();

        let catalog = Catalog::load(Some(dir.path())).unwrap();

        assert_eq!(catalog.trips().len(), 3);
        assert_eq!(catalog.get(2025).map(|t| t.title.as_str()), Some("Irland"));
        assert!(catalog.get(2019).is_some());
    }

    #[test]
    fn test_malformed_file_names_its_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ \"year\": 2027 }").unwrap();

        let err = Catalog::load(Some(dir.path())).unwrap_err();

        match err {
            AppError::TripData { source_name, .. } => assert!(source_name.ends_with("broken.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_dir_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(Catalog::load(Some(&missing)), Err(AppError::Config(_))));
    }
}
