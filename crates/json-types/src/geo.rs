//! GeoJSON marshalling for spatial values.
//!
//! Spatial values do not map onto JSON directly. They are first written out as
//! standalone GeoJSON text, and the conversion engine parses that text back
//! into a `serde_json::Value`.

use crate::error::{JsonTypesError, Result};
use geo_types::{Coord, Geometry, LineString, Polygon};
use serde_json::{json, Value};
use tracing::trace;

/// Which spatial type a value belongs to; geography restricts coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoKind {
    /// Planar coordinates, any finite value
    Geometry,
    /// Longitude in [-180, 180], latitude in [-90, 90]
    Geography,
}

/// Write a spatial value as GeoJSON text.
///
/// `Line` is written as a two-point `LineString`; `Rect` and `Triangle` are
/// written as `Polygon`s.
pub fn marshal_geojson(geometry: &Geometry<f64>, kind: GeoKind) -> Result<String> {
    let value = geometry_to_geojson(geometry, kind)?;
    let text =
        serde_json::to_string(&value).map_err(|e| JsonTypesError::GeoEncoding(e.to_string()))?;
    trace!("Marshalled {kind:?} to {} bytes of GeoJSON", text.len());
    Ok(text)
}

fn geometry_to_geojson(geometry: &Geometry<f64>, kind: GeoKind) -> Result<Value> {
    let (type_name, coordinates) = match geometry {
        Geometry::Point(p) => ("Point", coord_to_json(p.0, kind)?),
        Geometry::Line(line) => (
            "LineString",
            coords_to_json([line.start, line.end], kind)?,
        ),
        Geometry::LineString(ls) => ("LineString", line_string_to_json(ls, kind)?),
        Geometry::Polygon(polygon) => ("Polygon", polygon_to_json(polygon, kind)?),
        Geometry::MultiPoint(mp) => (
            "MultiPoint",
            coords_to_json(mp.0.iter().map(|p| p.0), kind)?,
        ),
        Geometry::MultiLineString(mls) => {
            let lines = mls
                .0
                .iter()
                .map(|ls| line_string_to_json(ls, kind))
                .collect::<Result<Vec<_>>>()?;
            ("MultiLineString", Value::Array(lines))
        }
        Geometry::MultiPolygon(mp) => {
            let polygons = mp
                .0
                .iter()
                .map(|p| polygon_to_json(p, kind))
                .collect::<Result<Vec<_>>>()?;
            ("MultiPolygon", Value::Array(polygons))
        }
        Geometry::GeometryCollection(gc) => {
            let geometries = gc
                .0
                .iter()
                .map(|g| geometry_to_geojson(g, kind))
                .collect::<Result<Vec<_>>>()?;
            return Ok(json!({
                "type": "GeometryCollection",
                "geometries": geometries
            }));
        }
        Geometry::Rect(rect) => ("Polygon", polygon_to_json(&rect.to_polygon(), kind)?),
        Geometry::Triangle(triangle) => {
            ("Polygon", polygon_to_json(&triangle.to_polygon(), kind)?)
        }
    };

    Ok(json!({
        "type": type_name,
        "coordinates": coordinates
    }))
}

fn polygon_to_json(polygon: &Polygon<f64>, kind: GeoKind) -> Result<Value> {
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| line_string_to_json(ring, kind))
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(rings))
}

fn line_string_to_json(ls: &LineString<f64>, kind: GeoKind) -> Result<Value> {
    coords_to_json(ls.0.iter().copied(), kind)
}

fn coords_to_json(coords: impl IntoIterator<Item = Coord<f64>>, kind: GeoKind) -> Result<Value> {
    let coords = coords
        .into_iter()
        .map(|c| coord_to_json(c, kind))
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(coords))
}

fn coord_to_json(c: Coord<f64>, kind: GeoKind) -> Result<Value> {
    if !c.x.is_finite() || !c.y.is_finite() {
        return Err(JsonTypesError::GeoEncoding(format!(
            "non-finite coordinate ({}, {})",
            c.x, c.y
        )));
    }
    if kind == GeoKind::Geography
        && (!(-180.0..=180.0).contains(&c.x) || !(-90.0..=90.0).contains(&c.y))
    {
        return Err(JsonTypesError::GeoEncoding(format!(
            "coordinate ({}, {}) is outside longitude/latitude bounds",
            c.x, c.y
        )));
    }
    Ok(json!([c.x, c.y]))
}
