//! Border shape: administrative boundaries as dashed strokes.

use crate::canvas::{Canvas, Color, LineStyle};
use crate::geometry::Point;

const STROKE_WIDTH: f32 = 1.0;
const DASH_ON: f32 = 6.0;
const DASH_OFF: f32 = 3.0;

fn border_color() -> Color {
    Color::from_rgba8(120, 120, 120, 255)
}

/// An administrative boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    screen: Vec<Point>,
}

impl Border {
    /// Create a border over the feature's raw coordinates.
    pub fn new(coordinates: Vec<Point>) -> Self {
        Self {
            screen: coordinates,
        }
    }

    pub(super) fn screen(&self) -> &[Point] {
        &self.screen
    }

    pub(super) fn screen_mut(&mut self) -> &mut [Point] {
        &mut self.screen
    }

    pub(super) fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.stroke_polyline(
            &self.screen,
            &LineStyle::dashed(border_color(), STROKE_WIDTH, DASH_ON, DASH_OFF),
        );
    }
}
