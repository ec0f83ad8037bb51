//! GeoJSON feature loading.
//!
//! Decodes a GeoJSON `FeatureCollection` into [`MapFeature`] records for
//! the tessellator. Only the geometry types the pipeline models are
//! mapped — `Point`, `LineString`, and `Polygon` (outer ring) — anything
//! else is skipped with a debug log, mirroring the classifier's
//! best-effort policy: unsupported input means fewer shapes, never a
//! failed load.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::feature::MapFeature;
use crate::geometry::{GeometryType, Point};

/// Errors that can occur while loading GeoJSON input.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// The input is not valid JSON or not structurally GeoJSON.
    #[error("failed to parse GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level object is not a `FeatureCollection`.
    #[error("not a FeatureCollection: found type {0:?}")]
    NotACollection(String),
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    #[serde(other)]
    Unsupported,
}

/// Parse a GeoJSON `FeatureCollection` into map features.
///
/// Property values become tag strings: JSON strings verbatim, other
/// scalars through their JSON rendering, nulls dropped.
///
/// # Errors
///
/// Returns [`GeoJsonError`] when the input is not parseable JSON or the
/// top-level object is not a `FeatureCollection`. Individual features
/// with missing or unsupported geometry are skipped, not errors.
pub fn load_features(input: &str) -> Result<Vec<MapFeature>, GeoJsonError> {
    let collection: RawCollection = serde_json::from_str(input)?;
    if collection.kind != "FeatureCollection" {
        return Err(GeoJsonError::NotACollection(collection.kind));
    }

    let mut features = Vec::with_capacity(collection.features.len());
    for raw in collection.features {
        let Some(geometry) = raw.geometry else {
            debug!("feature without geometry, skipping");
            continue;
        };

        let (kind, coordinates) = match geometry {
            RawGeometry::Point { coordinates } => {
                (GeometryType::Point, vec![to_point(coordinates)])
            }
            RawGeometry::LineString { coordinates } => (
                GeometryType::Polyline,
                coordinates.into_iter().map(to_point).collect(),
            ),
            RawGeometry::Polygon { mut coordinates } => {
                if coordinates.is_empty() {
                    debug!("polygon without rings, skipping");
                    continue;
                }
                // Outer ring only; interior rings (holes) are not modeled.
                let outer = coordinates.swap_remove(0);
                (
                    GeometryType::Polygon,
                    outer.into_iter().map(to_point).collect(),
                )
            }
            RawGeometry::Unsupported => {
                debug!("unsupported geometry type, skipping");
                continue;
            }
        };

        let mut feature = MapFeature::new(kind, coordinates);
        for (key, value) in raw.properties.unwrap_or_default() {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(text) => {
                    feature.tags.insert(key, text);
                }
                other => {
                    feature.tags.insert(key, other.to_string());
                }
            }
        }
        features.push(feature);
    }

    Ok(features)
}

fn to_point(pair: [f64; 2]) -> Point {
    Point::new(pair[0] as f32, pair[1] as f32)
}
