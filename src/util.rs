use std::io::Read;

use geojson::{GeoJson, Geometry, Value};
use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::types::{Bounds, Coordinate};

/// Find the smallest bounds over an iterator of coordinates, or None if it is empty.
pub fn coordinate_bounds<'a, I: IntoIterator<Item = &'a Coordinate>>(iter: I) -> Option<Bounds> {
    iter.into_iter().fold(None, |b, c| {
        Some(match b {
            None => Bounds { north: c.lat, south: c.lat, east: c.lng, west: c.lng },
            Some(b) => Bounds {
                north: f64::max(b.north, c.lat),
                south: f64::min(b.south, c.lat),
                east: f64::max(b.east, c.lng),
                west: f64::min(b.west, c.lng),
            },
        })
    })
}

/// Keep the coordinates inside bounds, in their original order. Coordinates are tested in
/// parallel.
pub fn filter_within(coords: &[Coordinate], bounds: &Bounds) -> Vec<Coordinate> {
    let kept: Vec<Coordinate> = coords.par_iter().filter(|c| bounds.contains(c)).cloned().collect();
    debug!(total = coords.len(), kept = kept.len(), "filtered coordinates");
    kept
}

/// Return every position found in a GeoJSON document as a coordinate.
/// If bounds given, only return coordinates within bounds.
pub fn points_from_geojson<R: Read>(reader: R, b: Option<Bounds>) -> Result<Vec<Coordinate>> {
    let json = GeoJson::from_reader(reader).map_err(geojson::Error::MalformedJson)?;
    let mut points = Vec::with_capacity(2000);
    match json {
        GeoJson::FeatureCollection(ref fc) => {
            for feature in &fc.features {
                if let Some(ref geometry) = feature.geometry {
                    collect_positions(geometry, &mut points);
                }
            }
        }
        GeoJson::Feature(ref feature) => {
            if let Some(ref geometry) = feature.geometry {
                collect_positions(geometry, &mut points);
            }
        }
        GeoJson::Geometry(ref geometry) => collect_positions(geometry, &mut points),
    }
    Ok(match b {
        Some(b) => filter_within(&points, &b),
        None => points,
    })
}

fn collect_positions(geometry: &Geometry, out: &mut Vec<Coordinate>) {
    match geometry.value {
        Value::Point(ref p) => push_position(p, out),
        Value::MultiPoint(ref ps) | Value::LineString(ref ps) => {
            for p in ps {
                push_position(p, out);
            }
        }
        Value::MultiLineString(ref lines) | Value::Polygon(ref lines) => {
            for p in lines.iter().flatten() {
                push_position(p, out);
            }
        }
        Value::MultiPolygon(ref polys) => {
            for p in polys.iter().flatten().flatten() {
                push_position(p, out);
            }
        }
        Value::GeometryCollection(ref geoms) => {
            for g in geoms {
                collect_positions(g, out);
            }
        }
    }
}

// GeoJSON orders positions as [lng, lat].
#[inline]
fn push_position(pos: &[f64], out: &mut Vec<Coordinate>) {
    if pos.len() >= 2 {
        out.push(Coordinate { lat: pos[1], lng: pos[0] });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_BOUNDS;
    use crate::GeofenceError;

    #[test]
    fn bounds_of_coordinates() {
        assert_eq!(coordinate_bounds(Vec::<Coordinate>::new().iter()), None);
        let cs = [Coordinate::new(9.0, 40.0), Coordinate::new(3.5, 48.0), Coordinate::new(12.0, 35.0)];
        assert_eq!(coordinate_bounds(&cs),
                   Some(Bounds { north: 12.0, south: 3.5, east: 48.0, west: 35.0 }));
    }

    #[test]
    fn filter_keeps_order() {
        let cs = [Coordinate::new(9.0, 40.0),
                  Coordinate::new(2.0, 40.0),
                  Coordinate::new(3.5, 33.0),
                  Coordinate::new(9.0, 50.0)];
        assert_eq!(filter_within(&cs, &DEFAULT_BOUNDS),
                   vec![Coordinate::new(9.0, 40.0), Coordinate::new(3.5, 33.0)]);
    }

    #[test]
    fn reads_feature_collection() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [40.0, 9.0]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "LineString", "coordinates": [[50.0, 9.0], [38.7, 9.0]]}},
                {"type": "Feature", "properties": {}, "geometry": null}
            ]
        }"#;
        let all = points_from_geojson(doc.as_bytes(), None).unwrap();
        assert_eq!(all.len(), 3);
        let inside = points_from_geojson(doc.as_bytes(), Some(DEFAULT_BOUNDS)).unwrap();
        assert_eq!(inside, vec![Coordinate::new(9.0, 40.0), Coordinate::new(9.0, 38.7)]);
    }

    #[test]
    fn reads_bare_geometry_collection() {
        let doc = r#"{"type": "GeometryCollection", "geometries": [
            {"type": "Polygon", "coordinates": [[[33.0, 3.5], [48.0, 3.5], [48.0, 15.0], [33.0, 3.5]]]},
            {"type": "MultiPoint", "coordinates": [[0.0, 0.0]]}
        ]}"#;
        let inside = points_from_geojson(doc.as_bytes(), Some(DEFAULT_BOUNDS)).unwrap();
        assert_eq!(inside.len(), 4);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = points_from_geojson("{not json".as_bytes(), None).unwrap_err();
        assert!(matches!(err, GeofenceError::GeoJson(geojson::Error::MalformedJson(_))));
        let err = points_from_geojson(r#"{"type": "Point", "coordinates": "9,40"}"#.as_bytes(), None)
            .unwrap_err();
        assert!(matches!(err, GeofenceError::GeoJson(_)));
    }
}
