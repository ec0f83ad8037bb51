//! Drawable shape variants produced by classification.
//!
//! The drawable categories form a closed set, so they are modeled as an
//! enum-with-payload rather than a trait-object hierarchy: dispatch is a
//! `match`, exhaustiveness is compiler-checked, and the queue stores shapes
//! by value. Every variant carries the shared capability set the pipeline
//! relies on:
//!
//! - a z-index fixed at construction (read back for draw ordering);
//! - a screen-space coordinate buffer, initialized from the feature's raw
//!   coordinates and rewritten in place into pixel space by
//!   [`Shape::translate_and_scale`];
//! - a [`Shape::draw`] operation issuing variant-specific canvas calls.
//!
//! Styling (colors, widths, dashes, label sizing) lives in the variant
//! modules; the pipeline core never inspects it.

mod border;
mod geo;
mod place;
mod road;
mod waterway;

pub use border::Border;
pub use geo::{GeoFeature, GeoFeatureKind};
pub use place::PopulatedPlace;
pub use road::Road;
pub use waterway::Waterway;

use crate::canvas::Canvas;
use crate::geometry::Point;

// =============================================================================
// Draw-Order Constants
// =============================================================================
//
// Lower z draws first (underlay), higher z draws last (overlay): land cover
// under water under roads, administrative borders over roads, place markers
// and labels on top of everything.

/// Z-index for land-cover areas.
pub const Z_GEO_FEATURE: i32 = 10;

/// Z-index for waterways.
pub const Z_WATERWAY: i32 = 40;

/// Z-index for roads.
pub const Z_ROAD: i32 = 60;

/// Z-index for administrative borders.
pub const Z_BORDER: i32 = 80;

/// Z-index for populated places.
pub const Z_POPULATED_PLACE: i32 = 100;

/// A typed drawable produced from one feature tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Highway stroke or point marker.
    Road(Road),
    /// River stroke or water-body fill.
    Waterway(Waterway),
    /// Administrative boundary stroke.
    Border(Border),
    /// Place marker with optional label.
    PopulatedPlace(PopulatedPlace),
    /// Land-cover fill.
    GeoFeature(GeoFeature),
}

impl Shape {
    /// Draw-order key, fixed at construction by the variant.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Road(_) => Z_ROAD,
            Self::Waterway(_) => Z_WATERWAY,
            Self::Border(_) => Z_BORDER,
            Self::PopulatedPlace(_) => Z_POPULATED_PLACE,
            Self::GeoFeature(_) => Z_GEO_FEATURE,
        }
    }

    /// The shape's screen-space coordinate buffer.
    ///
    /// Holds the feature's raw projected coordinates until
    /// [`Shape::translate_and_scale`] rewrites them into pixel space; the
    /// bounding-box fold reads the buffer in the former state.
    pub fn screen_coordinates(&self) -> &[Point] {
        match self {
            Self::Road(road) => road.screen(),
            Self::Waterway(waterway) => waterway.screen(),
            Self::Border(border) => border.screen(),
            Self::PopulatedPlace(place) => place.screen(),
            Self::GeoFeature(geo) => geo.screen(),
        }
    }

    fn screen_coordinates_mut(&mut self) -> &mut [Point] {
        match self {
            Self::Road(road) => road.screen_mut(),
            Self::Waterway(waterway) => waterway.screen_mut(),
            Self::Border(border) => border.screen_mut(),
            Self::PopulatedPlace(place) => place.screen_mut(),
            Self::GeoFeature(geo) => geo.screen_mut(),
        }
    }

    /// Rewrite the coordinate buffer in place into final pixel space.
    ///
    /// Each point becomes `((x - offset_x) * scale,
    /// canvas_height - (y - offset_y) * scale)`: world-space Y grows upward
    /// while image-space Y grows downward, so the vertical axis is flipped
    /// against the canvas height.
    pub fn translate_and_scale(
        &mut self,
        offset_x: f32,
        offset_y: f32,
        scale: f32,
        canvas_height: u32,
    ) {
        let height = canvas_height as f32;
        for point in self.screen_coordinates_mut() {
            point.x = (point.x - offset_x) * scale;
            point.y = height - (point.y - offset_y) * scale;
        }
    }

    /// Issue this shape's fill/stroke/marker/text calls against a canvas.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Road(road) => road.draw(canvas),
            Self::Waterway(waterway) => waterway.draw(canvas),
            Self::Border(border) => border.draw(canvas),
            Self::PopulatedPlace(place) => place.draw(canvas),
            Self::GeoFeature(geo) => geo.draw(canvas),
        }
    }
}
