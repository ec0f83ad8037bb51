//! Core geometric types shared across the pipeline.

/// A 2-D coordinate pair.
///
/// The same type is used for world-space coordinates (as supplied by the
/// feature source) and for screen-space coordinates (after a shape has been
/// translated and scaled into pixel space). Which space a point lives in is
/// positional: the shape's coordinate buffer starts in world space and is
/// rewritten in place during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate (world: eastward; screen: rightward).
    pub x: f32,
    /// Vertical coordinate (world: northward; screen: downward).
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Geometry kind of an input feature.
///
/// Classification rules condition on this: some tag keys only produce a
/// shape for polygon features (see the classifier dispatch table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// A single location (one coordinate pair).
    Point,
    /// An open sequence of line segments.
    Polyline,
    /// A closed ring (first and last coordinate may or may not repeat).
    Polygon,
}
