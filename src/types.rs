use serde::{Deserialize, Serialize};

use crate::error::{GeofenceError, Result};

/// Represent some map coordinate, in decimal degrees.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Coordinate {
        Coordinate { lat, lng }
    }
}

/// Represent some map bounds, in decimal degrees.
///
/// `north > south` and `east > west` are expected but only checked by [`Bounds::validate`];
/// containment tests on inverted bounds simply never match.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Default geofence: a fixed national bounding box.
pub const DEFAULT_BOUNDS: Bounds = Bounds {
    north: 15.0,
    south: 3.5,
    east: 48.0,
    west: 33.0,
};

impl Default for Bounds {
    fn default() -> Bounds {
        DEFAULT_BOUNDS
    }
}

impl Bounds {
    pub fn range_lat(&self) -> f64 {
        self.north - self.south
    }

    pub fn range_lon(&self) -> f64 {
        self.east - self.west
    }

    /// True iff the point lies inside the box. Every edge is inclusive, and NaN on either axis
    /// is outside.
    #[inline]
    pub fn contains_lat_lng(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    #[inline]
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.contains_lat_lng(c.lat, c.lng)
    }

    /// Check the orientation invariant. Also rejects NaN edges.
    pub fn validate(&self) -> Result<()> {
        if self.north > self.south && self.east > self.west {
            Ok(())
        } else {
            Err(GeofenceError::InvalidBounds(*self))
        }
    }
}
