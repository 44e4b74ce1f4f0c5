use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use log::info;
use serde_json::Value;

use crate::unit::{Unit, UnitId};

/// Read units from a GeoJSON FeatureCollection file.
///
/// Each feature must carry a Polygon or MultiPolygon geometry plus `id`,
/// `crimes`, and `population` properties, the shape the upstream crime and
/// boundary import writes out.
pub fn read_units_from_geojson(path: &Path) -> Result<Vec<Unit>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;

    read_units_from_geojson_bytes(&bytes)
}

/// Read units from GeoJSON bytes.
pub fn read_units_from_geojson_bytes(bytes: &[u8]) -> Result<Vec<Unit>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;

    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("GeoJSON root has no 'features' array"))?;

    let mut units = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let unit = parse_feature(feature)
            .with_context(|| format!("Invalid feature at index {idx}"))?;
        units.push(unit);
    }

    info!("loaded {} units from GeoJSON", units.len());
    Ok(units)
}

fn parse_feature(feature: &Value) -> Result<Unit> {
    let properties = &feature["properties"];

    let id = match &properties["id"] {
        Value::String(s) => UnitId::new(s),
        Value::Number(n) => UnitId::new(n.to_string()),
        _ => bail!("Feature property 'id' must be a string or number"),
    };

    let crimes = parse_count(properties, "crimes")?;
    let population = parse_count(properties, "population")?;
    let geometry = parse_geometry(&feature["geometry"])?;

    Ok(Unit::new(id, geometry, crimes, population))
}

fn parse_count(properties: &Value, key: &str) -> Result<u64> {
    properties[key].as_u64()
        .ok_or_else(|| anyhow!("Feature property '{key}' must be a non-negative integer"))
}

fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("Geometry has no 'coordinates' array"))?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => {
            let polygons = coords.iter()
                .map(|polygon| {
                    polygon.as_array()
                        .ok_or_else(|| anyhow!("Invalid MultiPolygon: expected an array of polygons"))
                        .and_then(|rings| parse_polygon_coords(rings))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(MultiPolygon(polygons))
        }
        other => bail!("Unsupported geometry type: {:?}", other),
    }
}

/// Parse one polygon's ring list: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let exterior = rings.first()
        .and_then(|ring| ring.as_array())
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))?;

    let mut interiors = Vec::new();
    for ring in &rings[1..] {
        let ring = ring.as_array()
            .ok_or_else(|| anyhow!("Invalid Polygon: ring must be an array"))?;
        interiors.push(parse_ring_coords(ring)?);
    }

    Ok(Polygon::new(parse_ring_coords(exterior)?, interiors))
}

/// Parse a ring (exterior or interior): `[[x, y], [x, y], ...]`.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for pair in coords {
        let pair = pair.as_array()
            .ok_or_else(|| anyhow!("Invalid coordinate: expected [x, y]"))?;
        if pair.len() < 2 {
            bail!("Invalid coordinate: expected [x, y]");
        }

        let x = pair[0].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = pair[1].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    // Ensure the ring is closed (first point == last point).
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
