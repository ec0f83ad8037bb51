//! Geographic area shape: land cover fills.

use crate::canvas::{Canvas, Color, LineStyle};
use crate::geometry::Point;

const OUTLINE_WIDTH: f32 = 1.0;

/// Land-cover category of a [`GeoFeature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoFeatureKind {
    /// Natural open land.
    Plain,
    /// Built-up land (buildings, leisure grounds, amenities).
    Residential,
    /// Forest and orchard cover (produced by the tessellator overrides).
    Forest,
}

impl GeoFeatureKind {
    fn color(self) -> Color {
        match self {
            Self::Plain => Color::from_rgba8(200, 232, 180, 255),
            Self::Residential => Color::from_rgba8(222, 215, 206, 255),
            Self::Forest => Color::from_rgba8(116, 170, 112, 255),
        }
    }
}

/// A land-cover area.
///
/// Classification only produces `Plain`/`Residential` features from polygon
/// geometry, but the forest overrides fire for any geometry kind; rings too
/// short to fill fall back to a stroke of the same color.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    screen: Vec<Point>,
    kind: GeoFeatureKind,
}

impl GeoFeature {
    /// Create a land-cover area over the feature's raw coordinates.
    pub fn new(coordinates: Vec<Point>, kind: GeoFeatureKind) -> Self {
        Self {
            screen: coordinates,
            kind,
        }
    }

    /// Land-cover category.
    pub fn kind(&self) -> GeoFeatureKind {
        self.kind
    }

    pub(super) fn screen(&self) -> &[Point] {
        &self.screen
    }

    pub(super) fn screen_mut(&mut self) -> &mut [Point] {
        &mut self.screen
    }

    pub(super) fn draw(&self, canvas: &mut dyn Canvas) {
        let color = self.kind.color();
        if self.screen.len() >= 3 {
            canvas.fill_polygon(&self.screen, color);
        } else {
            canvas.stroke_polyline(&self.screen, &LineStyle::solid(color, OUTLINE_WIDTH));
        }
    }
}
