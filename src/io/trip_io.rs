use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Trip;
use crate::ops::check::check_trip;

/// The dataset compiled into the binary
const BUILTIN_TRIP: &str = include_str!("../data/trip.toml");

/// Error type for loading trip data and configuration
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse trip data: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid trip data: {0}")]
    InvalidDataset(String),
}

/// Parse a trip document without validating it
pub fn parse_trip_unchecked(text: &str) -> Result<Trip, TripError> {
    Ok(toml::from_str(text)?)
}

/// Parse and validate a trip document. Datasets with check errors are refused.
pub fn parse_trip(text: &str) -> Result<Trip, TripError> {
    let trip = parse_trip_unchecked(text)?;
    let result = check_trip(&trip);
    if !result.valid {
        let summary = result
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(TripError::InvalidDataset(summary));
    }
    for warning in &result.warnings {
        tracing::warn!("trip data: {}", warning);
    }
    Ok(trip)
}

/// The embedded trip
pub fn builtin_trip() -> Result<Trip, TripError> {
    parse_trip(BUILTIN_TRIP)
}

/// Read a trip file with the same schema as the embedded one
pub fn read_trip(path: &Path) -> Result<Trip, TripError> {
    let text = fs::read_to_string(path).map_err(|e| TripError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_trip(&text)
}

fn read_trip_text(path: Option<&Path>) -> Result<String, TripError> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|e| TripError::ReadError {
            path: p.to_path_buf(),
            source: e,
        }),
        None => Ok(BUILTIN_TRIP.to_string()),
    }
}

/// Load a trip for inspection by `trip check`: parse errors still fail, but
/// check errors are left for the caller to report.
pub fn load_trip_unchecked(path: Option<&Path>) -> Result<Trip, TripError> {
    parse_trip_unchecked(&read_trip_text(path)?)
}

/// Load the trip from `path` when given, else the embedded dataset
pub fn load_trip(path: Option<&Path>) -> Result<Trip, TripError> {
    let trip = match path {
        Some(p) => read_trip(p)?,
        None => builtin_trip()?,
    };
    tracing::debug!(
        days = trip.day_count(),
        items = trip.items().count(),
        source = %path.map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "trip loaded"
    );
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use std::collections::HashSet;
    use tempfile::TempDir;

    const SMALL_TRIP: &str = r#"
[trip]
name = "Test trip"

[[days]]
date = "1/24"
day_label = "D1"
weekday = "SAT"
weather = { temp = "6°C", condition = "Cloudy", icon = "cloud" }

[[days.items]]
id = "a"
time = "15:20"
title = "Meet"
category = "other"

[[days.items]]
id = "b"
time = "16:50"
title = "Flight"
category = "transport"
note = """
Line one
Line two"""

[[days.items.additional_links]]
label = "Seat map"
url = "https://example.com/seats"
"#;

    #[test]
    fn builtin_trip_loads_and_is_valid() {
        let trip = builtin_trip().unwrap();
        assert_eq!(trip.day_count(), 8);
        assert_eq!(trip.days[0].day_label, "D1");
        assert_eq!(trip.days[0].items[0].id, "d1-1");
        assert!(check_trip(&trip).valid);
        assert!(!trip.hotels.is_empty());
        assert!(!trip.contacts.is_empty());
    }

    #[test]
    fn builtin_item_ids_are_unique() {
        let trip = builtin_trip().unwrap();
        let mut seen = HashSet::new();
        for (_, item) in trip.items() {
            assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
        }
        assert_eq!(seen.len(), trip.items().count());
    }

    #[test]
    fn builtin_staff_instructions_keep_line_breaks() {
        let trip = builtin_trip().unwrap();
        let (_, item) = trip.find_item("d2-1").unwrap();
        let staff = item.staff_instructions.as_deref().unwrap();
        assert!(staff.lines().count() > 10);
        assert!(staff.starts_with('【'));
    }

    #[test]
    fn parse_small_trip() {
        let trip = parse_trip(SMALL_TRIP).unwrap();
        assert_eq!(trip.info.name, "Test trip");
        let items = &trip.days[0].items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].category, Category::Transport);
        assert_eq!(items[1].note.as_deref(), Some("Line one\nLine two"));
        assert_eq!(items[1].additional_links[0].label, "Seat map");
    }

    #[test]
    fn duplicate_ids_are_refused() {
        let text = SMALL_TRIP.replace("id = \"b\"", "id = \"a\"");
        match parse_trip(&text) {
            Err(TripError::InvalidDataset(msg)) => assert!(msg.contains("duplicate item id a")),
            other => panic!("expected InvalidDataset, got {:?}", other),
        }
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let text = SMALL_TRIP.replace("category = \"other\"", "category = \"lodging\"");
        assert!(matches!(parse_trip(&text), Err(TripError::ParseError(_))));
    }

    #[test]
    fn unchecked_load_keeps_invalid_data() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trip.toml");
        fs::write(&path, SMALL_TRIP.replace("id = \"b\"", "id = \"a\"")).unwrap();
        let trip = load_trip_unchecked(Some(&path)).unwrap();
        assert!(!check_trip(&trip).valid);
        assert!(load_trip(Some(&path)).is_err());
    }

    #[test]
    fn read_trip_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trip.toml");
        fs::write(&path, SMALL_TRIP).unwrap();
        let trip = load_trip(Some(&path)).unwrap();
        assert_eq!(trip.days[0].items[0].title, "Meet");
    }

    #[test]
    fn missing_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = read_trip(&path).unwrap_err();
        assert!(matches!(err, TripError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }
}
