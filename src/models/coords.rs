use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the map, stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    /// Build a checked coordinate pair (finite, lat in ±90, lng in ±180).
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoordinates(format!(
                "latitude {lat} is out of range"
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoordinates(format!(
                "longitude {lng} is out of range"
            )));
        }
        Ok(Self { lat, lng })
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl FromStr for Coords {
    type Err = AppError;

    /// Parse `"lat,lng"` (spaces allowed around both values).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinates(format!("'{s}' (expected LAT,LNG)")))?;

        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| AppError::InvalidCoordinates(format!("'{s}' (expected LAT,LNG)")))
        };

        Coords::new(parse(lat)?, parse(lng)?)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}
