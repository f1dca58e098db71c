//! Decoding of GeoJSON Features and bare geometries into `Shape`s.
//!
//! Only the geometry types the query commands understand are accepted:
//! `Point`, `LineString` and `Polygon`.  Elevation values are ignored.

use std::fmt;

use geoseries::{Point, Series};
use serde_json::Value;

use crate::shape::Shape;

/// Errors that can occur when decoding a GeoJSON document.
#[derive(Debug, PartialEq)]
pub enum FeatureError {
    /// A Feature has no `geometry` member.
    GeometryMissing,
    /// The geometry is null, malformed, or of an unsupported type.
    DataInvalid(String),
    /// The `bbox` member is not an array of 4 or 6 numbers.
    BBoxInvalid,
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::GeometryMissing => write!(f, "geometry missing"),
            FeatureError::DataInvalid(reason) => write!(f, "invalid geometry data: {reason}"),
            FeatureError::BBoxInvalid => write!(f, "invalid bbox"),
        }
    }
}

impl std::error::Error for FeatureError {}

fn invalid(reason: impl Into<String>) -> FeatureError {
    FeatureError::DataInvalid(reason.into())
}

/// Decode a Feature or bare geometry.  Rings with at least `index_threshold`
/// points get a segment index.
pub fn parse_shape(text: &str, index_threshold: usize) -> Result<Shape, FeatureError> {
    let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
    decode(&value, index_threshold)
}

fn decode(value: &Value, index_threshold: usize) -> Result<Shape, FeatureError> {
    let object = value.as_object().ok_or_else(|| invalid("expected a JSON object"))?;
    if let Some(bbox) = object.get("bbox") {
        check_bbox(bbox)?;
    }

    match object.get("type").and_then(Value::as_str) {
        Some("Feature") => match object.get("geometry") {
            None => Err(FeatureError::GeometryMissing),
            Some(Value::Null) => Err(invalid("geometry is null")),
            Some(geometry) => decode(geometry, index_threshold),
        },
        Some(kind) => {
            let coords = object.get("coordinates")
                .ok_or_else(|| invalid(format!("{kind} without coordinates")))?;
            decode_geometry(kind, coords, index_threshold)
        }
        None => Err(invalid("missing type")),
    }
}

fn decode_geometry(kind: &str, coords: &Value, index_threshold: usize) -> Result<Shape, FeatureError> {
    match kind {
        "Point" => Ok(Shape::Point(decode_position(coords)?)),
        "LineString" => {
            let points = decode_positions(coords)?;
            if points.len() < 2 {
                return Err(invalid("LineString needs at least two positions"));
            }
            Ok(Shape::LineString(Series::build(points, false, index_threshold)))
        }
        "Polygon" => {
            let rings = coords.as_array().ok_or_else(|| invalid("Polygon coordinates must be an array"))?;
            let mut rings = rings.iter()
                .map(|ring| decode_positions(ring).map(|points| Series::build(points, true, index_threshold)));
            let exterior = rings.next().ok_or_else(|| invalid("Polygon without exterior ring"))??;
            let holes = rings.collect::<Result<Vec<_>, _>>()?;
            Ok(Shape::Polygon { exterior, holes })
        }
        other => Err(invalid(format!("unsupported geometry type {other:?}"))),
    }
}

fn decode_positions(value: &Value) -> Result<Vec<Point>, FeatureError> {
    value.as_array()
        .ok_or_else(|| invalid("expected an array of positions"))?
        .iter()
        .map(decode_position)
        .collect()
}

fn decode_position(value: &Value) -> Result<Point, FeatureError> {
    let position = value.as_array().ok_or_else(|| invalid("position must be an array"))?;
    if position.len() < 2 {
        return Err(invalid("position needs at least two numbers"));
    }
    let x = position[0].as_f64().ok_or_else(|| invalid("x must be a number"))?;
    let y = position[1].as_f64().ok_or_else(|| invalid("y must be a number"))?;
    Ok(Point::new(x, y))
}

fn check_bbox(value: &Value) -> Result<(), FeatureError> {
    let Some(items) = value.as_array() else { return Err(FeatureError::BBoxInvalid) };
    if !matches!(items.len(), 4 | 6) || !items.iter().all(Value::is_number) {
        return Err(FeatureError::BBoxInvalid);
    }
    Ok(())
}
