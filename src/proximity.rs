//! Proximity grouping — find every hotel within a radius of a chosen one.
//!
//! A single pass over the catalog: look up the reference hotel by name,
//! measure the great-circle distance to every record, keep the ones inside
//! the radius. Pure and stateless; the input slice is never mutated and
//! result order follows input order.

use crate::catalog::Hotel;
use crate::geo::{self, Position};
use serde::Serialize;
use std::fmt;

/// Proximity filter errors.
#[derive(Debug)]
pub enum ProximityError {
    /// No hotel with the requested name exists in the catalog.
    HotelNotFound(String),
    /// A record carries a non-finite coordinate, so no meaningful distance
    /// can be computed for it.
    InvalidPosition { name: String, lat: f64, lon: f64 },
}

impl fmt::Display for ProximityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HotelNotFound(name) => write!(f, "No hotel named '{}' in the catalog", name),
            Self::InvalidPosition { name, lat, lon } => {
                write!(f, "Hotel '{}' has a non-finite position ({}, {})", name, lat, lon)
            }
        }
    }
}

impl std::error::Error for ProximityError {}

/// A hotel that fell inside the search radius, with its distance from the
/// reference hotel.
#[derive(Debug, Clone, Serialize)]
pub struct ProximityMatch {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub distance_km: f64,
}

/// Look up the reference hotel by exact name.
///
/// Names are not required unique; the first record in input order wins.
pub fn find_reference<'a>(hotels: &'a [Hotel], name: &str) -> Result<&'a Hotel, ProximityError> {
    hotels
        .iter()
        .find(|h| h.name == name)
        .ok_or_else(|| ProximityError::HotelNotFound(name.to_string()))
}

/// Find every hotel within `radius_km` of the named reference hotel,
/// annotated with its distance.
///
/// Matches come back in catalog order. The reference hotel is itself a
/// match for any radius >= 0 (its distance is zero); a radius <= 0 yields
/// at most the reference and records at identical coordinates. Any record
/// with a non-finite coordinate, reference or not, fails the whole call
/// with `InvalidPosition`.
pub fn matches_within_radius(
    hotels: &[Hotel],
    reference_name: &str,
    radius_km: f64,
) -> Result<Vec<ProximityMatch>, ProximityError> {
    let reference = find_reference(hotels, reference_name)?;
    let origin = finite_position(reference)?;

    let mut matches = Vec::new();
    for hotel in hotels {
        let d = geo::distance_km(origin, finite_position(hotel)?);
        if d <= radius_km {
            matches.push(ProximityMatch { hotel: hotel.clone(), distance_km: d });
        }
    }
    Ok(matches)
}

/// Find every hotel within `radius_km` of the named reference hotel.
///
/// Same contract as [`matches_within_radius`] with the distances dropped.
pub fn find_within_radius(
    hotels: &[Hotel],
    reference_name: &str,
    radius_km: f64,
) -> Result<Vec<Hotel>, ProximityError> {
    Ok(matches_within_radius(hotels, reference_name, radius_km)?
        .into_iter()
        .map(|m| m.hotel)
        .collect())
}

fn finite_position(hotel: &Hotel) -> Result<Position, ProximityError> {
    let pos = hotel.position();
    if !pos.is_finite() {
        return Err(ProximityError::InvalidPosition {
            name: hotel.name.clone(),
            lat: hotel.lat,
            lon: hotel.lon,
        });
    }
    Ok(pos)
}
