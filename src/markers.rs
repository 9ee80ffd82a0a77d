use num::ToPrimitive;
use tracing::debug;

use crate::error::Result;
use crate::types::{Bounds, Coordinate, DEFAULT_BOUNDS};
use crate::validate_coordinate;

/// Markers placed by map clicks. Clicks outside the fence are refused.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    bounds: Bounds,
    markers: Vec<Coordinate>,
}

impl Default for MarkerSet {
    fn default() -> MarkerSet {
        MarkerSet::new(DEFAULT_BOUNDS)
    }
}

impl MarkerSet {
    /// Create an empty set that only accepts clicks inside `bounds`.
    pub fn new(bounds: Bounds) -> MarkerSet {
        MarkerSet { bounds, markers: Vec::new() }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Place a marker at the clicked point and return it. On error the set is left unchanged.
    pub fn place<T: ToPrimitive, U: ToPrimitive>(&mut self, lat: T, lng: U) -> Result<Coordinate> {
        let c = validate_coordinate(lat, lng, Some(&self.bounds)).map_err(|e| {
            debug!(error = %e, "marker rejected");
            e
        })?;
        self.markers.push(c);
        debug!(lat = c.lat, lng = c.lng, count = self.markers.len(), "marker placed");
        Ok(c)
    }

    pub fn markers(&self) -> &[Coordinate] {
        &self.markers[..]
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}
