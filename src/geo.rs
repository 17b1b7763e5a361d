//! Great-circle geometry on the spherical Earth model.
//!
//! All distances use the haversine formula on a sphere of radius 6371 km.
//! Accuracy: within ~0.3% of the true geodesic; the sphere ignores
//! ellipsoidal flattening.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate pair in decimal degrees (WGS84).
///
/// Expected ranges are lat -90..90 and lon -180..180; values outside are
/// not rejected here and simply produce meaningless distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Great-circle distance between two positions, in kilometers.
///
/// Symmetric, and zero exactly when both positions coincide. Non-finite
/// input coordinates propagate: the result is NaN.
pub fn distance_km(a: Position, b: Position) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lon.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Arithmetic mean of a set of positions, or None when the set is empty.
///
/// Averages in degree space, not a spherical centroid. Used as the map
/// center when rendering a city-scale result set.
pub fn mean_position(positions: &[Position]) -> Option<Position> {
    if positions.is_empty() {
        return None;
    }
    let n = positions.len() as f64;
    let lat = positions.iter().map(|p| p.lat).sum::<f64>() / n;
    let lon = positions.iter().map(|p| p.lon).sum::<f64>() / n;
    Some(Position { lat, lon })
}

/// Format a position as `"53.3438°N, 6.2546°W"`.
pub fn format_position(p: Position) -> String {
    let ns = if p.lat >= 0.0 { 'N' } else { 'S' };
    let ew = if p.lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{}, {:.4}°{}", p.lat.abs(), ns, p.lon.abs(), ew)
}
