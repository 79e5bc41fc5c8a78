use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid {axis} {value}: must be within [{min}, {max}]")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        check_axis("latitude", lat, 90.0)?;
        check_axis("longitude", lng, 180.0)?;
        Ok(Self { lat, lng })
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        // Rounding can push `a` past 1 for near-antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    pub fn google_maps_link(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

fn check_axis(axis: &'static str, value: f64, bound: f64) -> Result<(), GeoError> {
    if value.is_finite() && (-bound..=bound).contains(&value) {
        return Ok(());
    }
    Err(GeoError::InvalidCoordinate {
        axis,
        value,
        min: -bound,
        max: bound,
    })
}

pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, GeoError> {
    let from = Coordinate::new(lat1, lon1)?;
    let to = Coordinate::new(lat2, lon2)?;
    Ok(from.distance_km(&to))
}

pub fn generate_google_maps_link(lat: f64, lng: f64) -> Result<String, GeoError> {
    Ok(Coordinate::new(lat, lng)?.google_maps_link())
}
