//! Feature classification: tag keys to drawable shapes.
//!
//! Maps a recognized tag key plus the feature it came from onto a typed
//! shape. Dispatch is an explicit `match` over a closed key set with a
//! default no-match branch — unknown keys yield `None`, never an error —
//! so classification is total and the best-effort tessellation policy
//! needs no catch-all anywhere.

use crate::feature::MapFeature;
use crate::geometry::GeometryType;
use crate::shape::{Border, GeoFeature, GeoFeatureKind, PopulatedPlace, Road, Shape, Waterway};

/// The closed set of tag keys classification recognizes.
///
/// `Name` is recognized but produces no shape of its own; its value feeds
/// populated-place labels instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey {
    Highway,
    Water,
    Boundary,
    Population,
    Place,
    Natural,
    Name,
    Building,
    Leisure,
    Amenity,
}

impl TagKey {
    /// Parse a raw tag key. Unrecognized keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "highway" => Some(Self::Highway),
            "water" => Some(Self::Water),
            "boundary" => Some(Self::Boundary),
            "population" => Some(Self::Population),
            "place" => Some(Self::Place),
            "natural" => Some(Self::Natural),
            "name" => Some(Self::Name),
            "building" => Some(Self::Building),
            "leisure" => Some(Self::Leisure),
            "amenity" => Some(Self::Amenity),
            _ => None,
        }
    }
}

/// Produce the shape a recognized tag key maps to, if its geometry
/// condition holds.
///
/// | key | condition | result |
/// |---|---|---|
/// | `highway` | any | Road (marker when geometry is a point) |
/// | `water` | any | Waterway (fill when geometry is a polygon) |
/// | `boundary` | any | Border |
/// | `population`, `place` | any | PopulatedPlace |
/// | `natural` | polygon | GeoFeature (plain) |
/// | `building`, `leisure`, `amenity` | polygon | GeoFeature (residential) |
/// | `name` | — | no shape |
///
/// The shape takes a copy of the feature's coordinates as its screen
/// buffer; each call produces an independently owned shape, so one feature
/// with several matching tags enqueues several shapes.
pub fn classify(key: TagKey, feature: &MapFeature) -> Option<Shape> {
    let is_polygon = feature.geometry == GeometryType::Polygon;

    match key {
        TagKey::Highway => Some(Shape::Road(Road::new(
            feature.coordinates.clone(),
            feature.geometry == GeometryType::Point,
        ))),
        TagKey::Water => Some(Shape::Waterway(Waterway::new(
            feature.coordinates.clone(),
            is_polygon,
        ))),
        TagKey::Boundary => Some(Shape::Border(Border::new(feature.coordinates.clone()))),
        TagKey::Population | TagKey::Place => Some(Shape::PopulatedPlace(PopulatedPlace::new(
            feature.coordinates.clone(),
            feature.tag("name").map(str::to_owned),
        ))),
        TagKey::Natural if is_polygon => Some(Shape::GeoFeature(GeoFeature::new(
            feature.coordinates.clone(),
            GeoFeatureKind::Plain,
        ))),
        TagKey::Building | TagKey::Leisure | TagKey::Amenity if is_polygon => {
            Some(Shape::GeoFeature(GeoFeature::new(
                feature.coordinates.clone(),
                GeoFeatureKind::Residential,
            )))
        }
        TagKey::Natural | TagKey::Building | TagKey::Leisure | TagKey::Amenity => None,
        TagKey::Name => None,
    }
}
