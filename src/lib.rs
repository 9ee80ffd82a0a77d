//! Point-in-rectangle geofencing over latitude/longitude bounds.
//!
//! [`is_within_bounds`] is the core predicate: it never fails, and treats anything that is not a
//! usable number as outside the fence. [`validate_coordinate`] is the strict counterpart for
//! callers that need to tell a malformed input apart from a point that is merely outside.

use num::ToPrimitive;
use serde_json::Value;

mod types;
pub use types::*;
mod error;
pub use error::{GeofenceError, Result};
pub mod config;
pub mod markers;
pub mod util;

/// Return true iff `lat` lies in `[south, north]` and `lng` lies in `[west, east]`, both
/// inclusive. `None` bounds means [`DEFAULT_BOUNDS`].
///
/// Values with no `f64` representation, and NaN, are outside.
pub fn is_within_bounds<T: ToPrimitive, U: ToPrimitive>(lat: T, lng: U, bounds: Option<&Bounds>) -> bool {
    match (lat.to_f64(), lng.to_f64()) {
        (Some(lat), Some(lng)) => bounds.unwrap_or(&DEFAULT_BOUNDS).contains_lat_lng(lat, lng),
        _ => false,
    }
}

/// Same test as [`is_within_bounds`] for loosely typed input such as a JSON click event.
/// Anything other than a JSON number (strings, null, booleans, arrays, objects) is outside.
pub fn is_within_bounds_value(lat: &Value, lng: &Value, bounds: Option<&Bounds>) -> bool {
    match (lat.as_f64(), lng.as_f64()) {
        (Some(lat), Some(lng)) => is_within_bounds(lat, lng, bounds),
        _ => false,
    }
}

/// Strict form of [`is_within_bounds`]: returns the coordinate when it is inside, and says why
/// when it is not.
pub fn validate_coordinate<T: ToPrimitive, U: ToPrimitive>(lat: T,
                                                           lng: U,
                                                           bounds: Option<&Bounds>)
                                                           -> Result<Coordinate> {
    let lat = finite(lat.to_f64(), "latitude")?;
    let lng = finite(lng.to_f64(), "longitude")?;
    if bounds.unwrap_or(&DEFAULT_BOUNDS).contains_lat_lng(lat, lng) {
        Ok(Coordinate { lat, lng })
    } else {
        Err(GeofenceError::OutOfBounds { lat, lng })
    }
}

fn finite(v: Option<f64>, field: &'static str) -> Result<f64> {
    match v {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(GeofenceError::NotANumber { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_any_primitive() {
        assert!(is_within_bounds(9, 40, None));
        assert!(is_within_bounds(9.0f32, 40u8, None));
        assert!(!is_within_bounds(-9i64, 40, None));
    }

    #[test]
    fn nan_and_infinity_are_outside() {
        assert!(!is_within_bounds(f64::NAN, 40.0, None));
        assert!(!is_within_bounds(9.0, f64::INFINITY, None));
    }

    #[test]
    fn json_numbers_only() {
        assert!(is_within_bounds_value(&json!(9.0), &json!(40), None));
        assert!(!is_within_bounds_value(&json!("9"), &json!(40.0), None));
        assert!(!is_within_bounds_value(&json!(9.0), &Value::Null, None));
        assert!(!is_within_bounds_value(&json!(true), &json!(40.0), None));
        assert!(!is_within_bounds_value(&json!([9.0]), &json!({"lng": 40.0}), None));
    }

    #[test]
    fn validate_separates_failure_kinds() {
        let c = validate_coordinate(9.0, 40.0, None).unwrap();
        assert_eq!(c, Coordinate::new(9.0, 40.0));
        match validate_coordinate(f64::NAN, 40.0, None) {
            Err(GeofenceError::NotANumber { field }) => assert_eq!(field, "latitude"),
            other => panic!("unexpected {:?}", other),
        }
        match validate_coordinate(9.0, f64::NEG_INFINITY, None) {
            Err(GeofenceError::NotANumber { field }) => assert_eq!(field, "longitude"),
            other => panic!("unexpected {:?}", other),
        }
        match validate_coordinate(9.0, 50.0, None) {
            Err(GeofenceError::OutOfBounds { lat, lng }) => assert_eq!((lat, lng), (9.0, 50.0)),
            other => panic!("unexpected {:?}", other),
        }
    }
}
