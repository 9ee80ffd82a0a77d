use thiserror::Error;

use crate::types::Bounds;

pub type Result<T> = std::result::Result<T, GeofenceError>;

#[derive(Debug, Error)]
pub enum GeofenceError {
    #[error("{field} is not a finite number")]
    NotANumber { field: &'static str },
    #[error("({lat}, {lng}) is outside the geofence")]
    OutOfBounds { lat: f64, lng: f64 },
    #[error("invalid bounds {0:?}: north must exceed south and east must exceed west")]
    InvalidBounds(Bounds),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to read geojson")]
    GeoJson(#[from] geojson::Error),
    #[error("failed to parse config")]
    Config(#[from] toml::de::Error),
}
