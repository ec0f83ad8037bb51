//! Geometric primitives and bounding-box accumulation.
//!
//! Provides the coordinate and geometry-kind types used throughout the
//! pipeline, and the [`BoundingBox`] that the tessellator folds shape
//! extents into and the rasterizer reads back to compute the
//! world-to-pixel scale.

mod types;

pub use types::{GeometryType, Point};

/// Substitute extent for a degenerate (zero or never-folded) bounding box.
///
/// Dividing a canvas dimension by a zero extent would yield an infinite
/// scale; the rasterizer uses [`BoundingBox::clamped_width`] and
/// [`BoundingBox::clamped_height`], which fall back to this value, so the
/// scale is always finite.
pub const MIN_EXTENT: f32 = 1.0;

/// Minimal axis-aligned rectangle enclosing a set of folded points.
///
/// Starts at the identity extremes (`+∞`/`-∞`) and only ever tightens
/// toward the data via min/max folding: after folding N points, every
/// folded point lies within `[min_x, max_x] × [min_y, max_y]`.
///
/// # Example
///
/// ```
/// use vectile::geometry::{BoundingBox, Point};
///
/// let mut bbox = BoundingBox::empty();
/// bbox.extend(Point::new(2.0, 5.0));
/// bbox.extend(Point::new(-1.0, 3.0));
/// assert_eq!(bbox.min_x, -1.0);
/// assert_eq!(bbox.max_x, 2.0);
/// assert_eq!(bbox.width(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest folded X coordinate.
    pub min_x: f32,
    /// Largest folded X coordinate.
    pub max_x: f32,
    /// Smallest folded Y coordinate.
    pub min_y: f32,
    /// Largest folded Y coordinate.
    pub max_y: f32,
}

impl BoundingBox {
    /// Create a box that no point has been folded into.
    ///
    /// The extremes are chosen so that the first `extend` establishes the
    /// invariant `min <= max` on both axes.
    pub fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    /// Fold a single point into the box.
    pub fn extend(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Fold every point in a slice into the box.
    pub fn extend_all(&mut self, points: &[Point]) {
        for point in points {
            self.extend(*point);
        }
    }

    /// Returns true if no point has been folded in yet.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Horizontal extent. Negative infinity for an empty box.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent. Negative infinity for an empty box.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Horizontal extent with degenerate values replaced by [`MIN_EXTENT`].
    ///
    /// A box holding a single point (or a vertical line) has zero width;
    /// an empty box has a negative-infinite one. Both would poison the
    /// scale computation, so they are clamped here.
    pub fn clamped_width(&self) -> f32 {
        let width = self.width();
        if width > 0.0 && width.is_finite() {
            width
        } else {
            MIN_EXTENT
        }
    }

    /// Vertical extent with degenerate values replaced by [`MIN_EXTENT`].
    pub fn clamped_height(&self) -> f32 {
        let height = self.height();
        if height > 0.0 && height.is_finite() {
            height
        } else {
            MIN_EXTENT
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_box_reports_empty() {
        let bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
    }

    #[test]
    fn test_single_point_establishes_invariant() {
        let mut bbox = BoundingBox::empty();
        bbox.extend(Point::new(3.0, 7.0));

        assert!(!bbox.is_empty());
        assert_eq!(bbox.min_x, 3.0);
        assert_eq!(bbox.max_x, 3.0);
        assert_eq!(bbox.min_y, 7.0);
        assert_eq!(bbox.max_y, 7.0);
    }

    #[test]
    fn test_extend_only_tightens_toward_data() {
        let mut bbox = BoundingBox::empty();
        bbox.extend(Point::new(0.0, 0.0));
        bbox.extend(Point::new(10.0, 10.0));

        // A point inside the current bounds must not change them.
        bbox.extend(Point::new(5.0, 5.0));
        assert_eq!(bbox.min_x, 0.0);
        assert_eq!(bbox.max_x, 10.0);
        assert_eq!(bbox.min_y, 0.0);
        assert_eq!(bbox.max_y, 10.0);
    }

    #[test]
    fn test_extend_all_matches_repeated_extend() {
        let points = [
            Point::new(1.0, 2.0),
            Point::new(-3.0, 8.0),
            Point::new(4.0, -1.0),
        ];

        let mut folded = BoundingBox::empty();
        folded.extend_all(&points);

        let mut reference = BoundingBox::empty();
        for p in points {
            reference.extend(p);
        }

        assert_eq!(folded, reference);
    }

    #[test]
    fn test_width_and_height() {
        let mut bbox = BoundingBox::empty();
        bbox.extend(Point::new(0.0, 0.0));
        bbox.extend(Point::new(10.0, 4.0));

        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 4.0);
    }

    #[test]
    fn test_clamped_extent_for_zero_width() {
        // Vertical line: zero width, positive height.
        let mut bbox = BoundingBox::empty();
        bbox.extend(Point::new(5.0, 0.0));
        bbox.extend(Point::new(5.0, 10.0));

        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.clamped_width(), MIN_EXTENT);
        assert_eq!(bbox.clamped_height(), 10.0);
    }

    #[test]
    fn test_clamped_extent_for_empty_box() {
        let bbox = BoundingBox::empty();
        assert_eq!(bbox.clamped_width(), MIN_EXTENT);
        assert_eq!(bbox.clamped_height(), MIN_EXTENT);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(BoundingBox::default().is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_fold_containment(
                xs in proptest::collection::vec(-1e6f32..1e6, 1..50),
                ys in proptest::collection::vec(-1e6f32..1e6, 1..50)
            ) {
                let points: Vec<Point> = xs
                    .iter()
                    .zip(ys.iter())
                    .map(|(&x, &y)| Point::new(x, y))
                    .collect();

                let mut bbox = BoundingBox::empty();
                bbox.extend_all(&points);

                // Every folded point must lie within the box.
                for p in &points {
                    prop_assert!(bbox.min_x <= p.x && p.x <= bbox.max_x);
                    prop_assert!(bbox.min_y <= p.y && p.y <= bbox.max_y);
                }
            }

            #[test]
            fn test_invariant_after_first_fold(
                x in -1e6f32..1e6,
                y in -1e6f32..1e6
            ) {
                let mut bbox = BoundingBox::empty();
                bbox.extend(Point::new(x, y));

                prop_assert!(bbox.min_x <= bbox.max_x);
                prop_assert!(bbox.min_y <= bbox.max_y);
                prop_assert!(!bbox.is_empty());
            }

            #[test]
            fn test_clamped_extents_always_positive_and_finite(
                xs in proptest::collection::vec(-1e6f32..1e6, 0..20),
                ys in proptest::collection::vec(-1e6f32..1e6, 0..20)
            ) {
                let points: Vec<Point> = xs
                    .iter()
                    .zip(ys.iter())
                    .map(|(&x, &y)| Point::new(x, y))
                    .collect();

                let mut bbox = BoundingBox::empty();
                bbox.extend_all(&points);

                prop_assert!(bbox.clamped_width() > 0.0);
                prop_assert!(bbox.clamped_width().is_finite());
                prop_assert!(bbox.clamped_height() > 0.0);
                prop_assert!(bbox.clamped_height().is_finite());
            }
        }
    }
}
