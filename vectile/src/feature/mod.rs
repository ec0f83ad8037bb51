//! Map feature input records.
//!
//! Provides the [`MapFeature`] type that carries one record from the
//! feature source into the tessellator: a geometry kind, an ordered
//! world-space coordinate sequence, and a free-form tag mapping.

use std::collections::HashMap;

use crate::geometry::{GeometryType, Point};

/// One input geographic record.
///
/// Tag keys are unique within a feature; their iteration order is
/// irrelevant to the pipeline (shapes produced from different tags carry
/// their own z-index, and equal-z draw order is unspecified anyway).
///
/// # Example
///
/// ```
/// use vectile::feature::MapFeature;
/// use vectile::geometry::{GeometryType, Point};
///
/// let feature = MapFeature::new(
///     GeometryType::Polygon,
///     vec![
///         Point::new(0.0, 0.0),
///         Point::new(1.0, 0.0),
///         Point::new(1.0, 1.0),
///     ],
/// )
/// .with_tag("building", "yes");
///
/// assert_eq!(feature.tag("building"), Some("yes"));
/// assert_eq!(feature.tag("highway"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapFeature {
    /// Geometry kind of the coordinate sequence.
    pub geometry: GeometryType,
    /// Ordered world-space coordinates.
    pub coordinates: Vec<Point>,
    /// Tag key/value attributes (keys unique, order irrelevant).
    pub tags: HashMap<String, String>,
}

impl MapFeature {
    /// Create a feature with no tags.
    pub fn new(geometry: GeometryType, coordinates: Vec<Point>) -> Self {
        Self {
            geometry,
            coordinates,
            tags: HashMap::new(),
        }
    }

    /// Attach a tag, replacing any previous value for the same key.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag value by exact key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
