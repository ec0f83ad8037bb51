//! Tile rasterization: draining the draw queue onto a canvas.
//!
//! Computes a uniform world-to-pixel scale from the accumulated bounding
//! box, fills the background, and draws every queued shape in ascending
//! z-index order. The scale is the minimum of the per-axis scales, so the
//! full extent always fits the canvas without distortion; the shorter-
//! scale axis binds and the other axis keeps its margin.

use thiserror::Error;
use tracing::debug;

use crate::canvas::{Canvas, Color, PixmapCanvas};
use crate::geometry::BoundingBox;
use crate::queue::DrawQueue;

/// Errors surfaced by rasterization.
///
/// Per the pipeline's best-effort policy these are deliberately few:
/// degenerate geometry is clamped, an empty queue renders a background-only
/// tile, and only canvas allocation can actually fail.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested canvas could not be allocated.
    #[error("invalid canvas dimensions {width}×{height}: both must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

fn background_color() -> Color {
    Color::WHITE
}

/// Rasterize a tile into a freshly allocated pixmap canvas.
///
/// # Errors
///
/// Returns [`RenderError::InvalidDimensions`] when `width` or `height` is
/// zero. Everything else degrades gracefully: a degenerate bounding box is
/// clamped to a finite scale and an empty queue yields a background-only
/// tile.
///
/// # Example
///
/// ```
/// use vectile::geometry::BoundingBox;
/// use vectile::queue::DrawQueue;
/// use vectile::render::rasterize;
///
/// let canvas = rasterize(DrawQueue::new(), &BoundingBox::empty(), 256, 256).unwrap();
/// assert_eq!(canvas.pixmap().width(), 256);
/// ```
pub fn rasterize(
    queue: DrawQueue,
    bounding_box: &BoundingBox,
    width: u32,
    height: u32,
) -> Result<PixmapCanvas, RenderError> {
    let mut canvas = PixmapCanvas::new(width, height)
        .ok_or(RenderError::InvalidDimensions { width, height })?;
    rasterize_onto(queue, bounding_box, &mut canvas);
    Ok(canvas)
}

/// Rasterize a tile onto an existing canvas.
///
/// This is the canvas-generic core of [`rasterize`]; callers that need a
/// pre-configured surface (a font-bearing [`PixmapCanvas`], a recording
/// mock in tests) drive it directly.
pub fn rasterize_onto(mut queue: DrawQueue, bounding_box: &BoundingBox, canvas: &mut dyn Canvas) {
    let scale_x = canvas.width() as f32 / bounding_box.clamped_width();
    let scale_y = canvas.height() as f32 / bounding_box.clamped_height();
    let scale = scale_x.min(scale_y);

    // An empty box has infinite minima; shapes can still be queued when
    // every one of them had an empty coordinate buffer. Zero offsets keep
    // the transform finite in that case.
    let (offset_x, offset_y) = if bounding_box.is_empty() {
        (0.0, 0.0)
    } else {
        (bounding_box.min_x, bounding_box.min_y)
    };

    debug!(
        shapes = queue.len(),
        scale,
        extent_w = bounding_box.clamped_width(),
        extent_h = bounding_box.clamped_height(),
        "rasterizing tile"
    );

    canvas.fill(background_color());

    let height = canvas.height();
    while let Some(mut shape) = queue.pop() {
        shape.translate_and_scale(offset_x, offset_y, scale, height);
        shape.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::LineStyle;
    use crate::geometry::Point;
    use crate::shape::{Border, GeoFeature, GeoFeatureKind, PopulatedPlace, Road, Shape};

    /// Canvas mock recording each draw call with its coordinates.
    struct RecordingCanvas {
        width: u32,
        height: u32,
        calls: Vec<(String, Vec<Point>)>,
    }

    impl RecordingCanvas {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }

        fn ops(&self) -> Vec<&str> {
            self.calls.iter().map(|(op, _)| op.as_str()).collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn fill(&mut self, _color: Color) {
            self.calls.push(("fill".to_string(), vec![]));
        }

        fn stroke_polyline(&mut self, points: &[Point], style: &LineStyle) {
            let op = if style.dash.is_some() {
                "stroke:dashed"
            } else {
                "stroke:solid"
            };
            self.calls.push((op.to_string(), points.to_vec()));
        }

        fn fill_polygon(&mut self, points: &[Point], _color: Color) {
            self.calls.push(("fill_polygon".to_string(), points.to_vec()));
        }

        fn draw_marker(&mut self, center: Point, _radius: f32, _color: Color) {
            self.calls.push(("marker".to_string(), vec![center]));
        }

        fn draw_text(&mut self, anchor: Point, _text: &str, _size: f32, _color: Color) {
            self.calls.push(("text".to_string(), vec![anchor]));
        }
    }

    fn boxed(points: &[Point]) -> BoundingBox {
        let mut bbox = BoundingBox::empty();
        bbox.extend_all(points);
        bbox
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let result = rasterize(DrawQueue::new(), &BoundingBox::empty(), 0, 256);
        assert!(matches!(
            result,
            Err(RenderError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_empty_queue_renders_background_only() {
        let mut canvas = RecordingCanvas::new(64, 64);
        rasterize_onto(DrawQueue::new(), &BoundingBox::empty(), &mut canvas);

        assert_eq!(canvas.ops(), vec!["fill"]);
    }

    #[test]
    fn test_scale_round_trip() {
        // bbox (0,0)-(10,10), canvas 100×50: scale = min(10, 5) = 5, and
        // world (5,5) maps to pixel (25, 50-25).
        let point = Point::new(5.0, 5.0);
        let bbox = boxed(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);

        let mut queue = DrawQueue::new();
        queue.push(Shape::PopulatedPlace(PopulatedPlace::new(
            vec![point],
            None,
        )));

        let mut canvas = RecordingCanvas::new(100, 50);
        rasterize_onto(queue, &bbox, &mut canvas);

        let (op, points) = &canvas.calls[1];
        assert_eq!(op, "marker");
        assert_eq!(points[0], Point::new(25.0, 25.0));
    }

    #[test]
    fn test_draw_order_is_ascending_z() {
        let line = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];

        let mut queue = DrawQueue::new();
        // Push top-most first to prove the queue reorders.
        queue.push(Shape::PopulatedPlace(PopulatedPlace::new(
            vec![Point::new(5.0, 5.0)],
            None,
        )));
        queue.push(Shape::Border(Border::new(line.clone())));
        queue.push(Shape::Road(Road::new(line, false)));
        queue.push(Shape::GeoFeature(GeoFeature::new(
            ring,
            GeoFeatureKind::Plain,
        )));

        let mut canvas = RecordingCanvas::new(100, 100);
        rasterize_onto(queue, &boxed(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]), &mut canvas);

        assert_eq!(
            canvas.ops(),
            vec![
                "fill",          // background
                "fill_polygon",  // GeoFeature, z 10
                "stroke:solid",  // Road, z 60
                "stroke:dashed", // Border, z 80
                "marker",        // PopulatedPlace, z 100
            ]
        );
    }

    #[test]
    fn test_degenerate_box_produces_finite_coordinates() {
        // All shapes share one coordinate: zero extent on both axes.
        let point = Point::new(7.0, 7.0);
        let bbox = boxed(&[point]);

        let mut queue = DrawQueue::new();
        queue.push(Shape::PopulatedPlace(PopulatedPlace::new(
            vec![point],
            None,
        )));

        let mut canvas = RecordingCanvas::new(64, 64);
        rasterize_onto(queue, &bbox, &mut canvas);

        let (_, points) = &canvas.calls[1];
        assert!(points[0].x.is_finite());
        assert!(points[0].y.is_finite());
        // Extent clamps to 1.0, so scale = 64 and the point sits on the
        // canvas edge at (0, 64).
        assert_eq!(points[0], Point::new(0.0, 64.0));
    }

    #[test]
    fn test_empty_box_with_queued_shape_stays_finite() {
        // A shape with an empty coordinate buffer never folded the box.
        let mut queue = DrawQueue::new();
        queue.push(Shape::Border(Border::new(vec![])));

        let mut canvas = RecordingCanvas::new(32, 32);
        rasterize_onto(queue, &BoundingBox::empty(), &mut canvas);

        // Border with no points: canvas sees the (degenerate) stroke call.
        assert_eq!(canvas.ops(), vec!["fill", "stroke:dashed"]);
    }

    #[test]
    fn test_rasterize_allocates_requested_dimensions() {
        let canvas = rasterize(DrawQueue::new(), &BoundingBox::empty(), 128, 96).unwrap();
        assert_eq!(canvas.pixmap().width(), 128);
        assert_eq!(canvas.pixmap().height(), 96);
    }

    #[test]
    fn test_uniform_scale_preserves_aspect() {
        // Wide box on a square canvas: X binds, Y keeps margin. A point at
        // the box's top-right corner must stay inside the canvas.
        let bbox = boxed(&[Point::new(0.0, 0.0), Point::new(20.0, 5.0)]);
        let mut queue = DrawQueue::new();
        queue.push(Shape::PopulatedPlace(PopulatedPlace::new(
            vec![Point::new(20.0, 5.0)],
            None,
        )));

        let mut canvas = RecordingCanvas::new(100, 100);
        rasterize_onto(queue, &bbox, &mut canvas);

        let (_, points) = &canvas.calls[1];
        // scale = min(100/20, 100/5) = 5.
        assert_eq!(points[0], Point::new(100.0, 75.0));
    }
}
