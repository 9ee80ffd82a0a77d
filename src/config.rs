use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::types::Bounds;

/// Geofence settings read from TOML:
///
/// ```toml
/// [bounds]
/// north = 15.0
/// south = 3.5
/// east = 48.0
/// west = 33.0
/// ```
///
/// A missing `[bounds]` table falls back to [`crate::DEFAULT_BOUNDS`].
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeofenceConfig {
    #[serde(default)]
    pub bounds: Bounds,
}

impl GeofenceConfig {
    /// Parse a TOML document and check that its bounds are oriented north > south, east > west.
    pub fn from_toml_str(s: &str) -> Result<GeofenceConfig> {
        let config: GeofenceConfig = toml::from_str(s)?;
        if let Err(e) = config.bounds.validate() {
            warn!(bounds = ?config.bounds, "rejecting configured bounds");
            return Err(e);
        }
        Ok(config)
    }

    /// Read and parse the TOML file at `path`. See [`GeofenceConfig::from_toml_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<GeofenceConfig> {
        GeofenceConfig::from_toml_str(&fs::read_to_string(path)?)
    }
}
