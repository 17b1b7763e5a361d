//! Hotel catalog — the in-memory dataset the proximity filter runs over.
//!
//! A catalog is a JSON array of `{name, lat, lon}` objects. Loading
//! normalizes nothing beyond what serde enforces (string name, numeric
//! coordinates); coordinate range checking is deliberately left to whoever
//! produced the file.

use crate::geo::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A named, geolocated hotel record. Names are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Hotel {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { name: name.into(), lat, lon }
    }

    pub fn position(&self) -> Position {
        Position { lat: self.lat, lon: self.lon }
    }
}

/// Catalog loading errors.
#[derive(Debug)]
pub enum CatalogError {
    Io(String),
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Cannot read catalog: {}", msg),
            Self::Parse(msg) => write!(f, "Invalid catalog JSON: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Load a hotel catalog from a JSON file.
///
/// An empty array is a valid (empty) catalog. Unknown fields in the records
/// are ignored, so richer exports load as-is.
pub fn load_hotels(path: &Path) -> Result<Vec<Hotel>, CatalogError> {
    let data = fs::read_to_string(path)
        .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&data).map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Unique hotel names in first-occurrence order.
pub fn hotel_names(hotels: &[Hotel]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for hotel in hotels {
        if !names.contains(&hotel.name.as_str()) {
            names.push(&hotel.name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(json: &str) -> (std::path::PathBuf, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, json).unwrap();
        (path, dir)
    }

    #[test]
    fn test_load_catalog() {
        let (path, _dir) = write_catalog(
            r#"[
                {"name": "The Shelbourne", "lat": 53.3389, "lon": -6.2554},
                {"name": "The Westbury", "lat": 53.3413, "lon": -6.2615}
            ]"#,
        );
        let hotels = load_hotels(&path).unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].name, "The Shelbourne");
        assert!((hotels[1].lat - 53.3413).abs() < 1e-9);
    }

    #[test]
    fn test_load_empty_catalog() {
        let (path, _dir) = write_catalog("[]");
        assert!(load_hotels(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_ignores_extra_fields() {
        let (path, _dir) = write_catalog(
            r#"[{"name": "The Marker", "lat": 53.3429, "lon": -6.2396, "stars": 5}]"#,
        );
        let hotels = load_hotels(&path).unwrap();
        assert_eq!(hotels[0].name, "The Marker");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_hotels(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let (path, _dir) = write_catalog(r#"[{"name": "Broken""#);
        assert!(matches!(load_hotels(&path), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_coordinate_field() {
        let (path, _dir) = write_catalog(r#"[{"name": "No Position"}]"#);
        assert!(matches!(load_hotels(&path), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_hotel_names_unique_in_order() {
        let hotels = vec![
            Hotel::new("B", 1.0, 1.0),
            Hotel::new("A", 2.0, 2.0),
            Hotel::new("B", 3.0, 3.0),
        ];
        assert_eq!(hotel_names(&hotels), vec!["B", "A"]);
    }
}
