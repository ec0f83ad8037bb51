//! Populated place shape: a marker with an optional name label.

use crate::canvas::{Canvas, Color};
use crate::geometry::Point;

const MARKER_RADIUS: f32 = 3.0;
const LABEL_SIZE: f32 = 12.0;
const LABEL_GAP: f32 = 2.0;

fn marker_color() -> Color {
    Color::from_rgba8(178, 34, 34, 255)
}

fn label_color() -> Color {
    Color::from_rgba8(60, 60, 60, 255)
}

/// A town, city or other populated place.
///
/// Anchored at the feature's first coordinate. The name comes from the
/// feature's `name` tag when present; without one only the marker renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedPlace {
    screen: Vec<Point>,
    name: Option<String>,
}

impl PopulatedPlace {
    /// Create a populated place over the feature's raw coordinates.
    pub fn new(coordinates: Vec<Point>, name: Option<String>) -> Self {
        Self {
            screen: coordinates,
            name,
        }
    }

    /// The place name, if the source feature carried one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(super) fn screen(&self) -> &[Point] {
        &self.screen
    }

    pub(super) fn screen_mut(&mut self) -> &mut [Point] {
        &mut self.screen
    }

    pub(super) fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(center) = self.screen.first() else {
            return;
        };

        canvas.draw_marker(*center, MARKER_RADIUS, marker_color());
        if let Some(name) = &self.name {
            let anchor = Point::new(
                center.x + MARKER_RADIUS + LABEL_GAP,
                center.y - LABEL_SIZE / 2.0,
            );
            canvas.draw_text(anchor, name, LABEL_SIZE, label_color());
        }
    }
}
