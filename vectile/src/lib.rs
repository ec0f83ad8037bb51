//! Vectile - vector map features to raster map tiles.
//!
//! This library is the tessellation-and-compositing pipeline of a map-tile
//! renderer: tagged vector features are classified into typed drawable
//! shapes, the shapes accumulate a bounding extent and a z-ordered draw
//! queue, and the queue is rasterized back-to-front onto a fixed-size
//! canvas.
//!
//! ```text
//! MapFeature stream ──► tessellate ──► (BoundingBox, DrawQueue) ──► rasterize ──► image
//! ```
//!
//! # Example
//!
//! ```
//! use vectile::feature::MapFeature;
//! use vectile::geometry::{GeometryType, Point};
//!
//! let building = MapFeature::new(
//!     GeometryType::Polygon,
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(4.0, 0.0),
//!         Point::new(4.0, 4.0),
//!         Point::new(0.0, 4.0),
//!     ],
//! )
//! .with_tag("building", "yes");
//!
//! let canvas = vectile::render_tile(&[building], 256, 256).unwrap();
//! assert_eq!(canvas.pixmap().width(), 256);
//! ```

pub mod canvas;
pub mod classify;
pub mod feature;
pub mod geojson;
pub mod geometry;
pub mod queue;
pub mod render;
pub mod shape;
pub mod telemetry;
pub mod tessellate;

use canvas::PixmapCanvas;
use feature::MapFeature;
use geometry::BoundingBox;
use queue::DrawQueue;
use render::RenderError;

/// Render one tile from a slice of features.
///
/// Convenience wrapper over the full pipeline: tessellates every feature
/// into a fresh bounding box and draw queue, then rasterizes the queue at
/// the requested dimensions. Callers needing a pre-configured canvas (a
/// label font, a mock) drive [`tessellate::tessellate`] and
/// [`render::rasterize_onto`] directly instead.
///
/// # Errors
///
/// Returns [`RenderError::InvalidDimensions`] when `width` or `height` is
/// zero; feature-level problems never fail a render.
pub fn render_tile(
    features: &[MapFeature],
    width: u32,
    height: u32,
) -> Result<PixmapCanvas, RenderError> {
    let mut bounding_box = BoundingBox::empty();
    let mut queue = DrawQueue::new();
    for feature in features {
        tessellate::tessellate(feature, &mut bounding_box, &mut queue);
    }
    render::rasterize(queue, &bounding_box, width, height)
}
