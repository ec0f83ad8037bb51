//! Feature tessellation: tagged features to queued shapes plus extent.
//!
//! For each feature, every tag is run through classification and each
//! produced shape is folded into the tile's bounding box and enqueued.
//! Two forest override rules run after the per-tag pass and can enqueue
//! one additional land-cover shape.
//!
//! Tessellation is best-effort end to end: an unrecognized or
//! condition-failing tag produces no shape and no error, and never stops
//! the remaining tags of the feature from being processed.

use tracing::{debug, trace};

use crate::classify::{classify, TagKey};
use crate::feature::MapFeature;
use crate::geometry::BoundingBox;
use crate::queue::DrawQueue;
use crate::shape::{GeoFeature, GeoFeatureKind, Shape};

/// Tessellate one feature into the tile's queue and bounding box.
///
/// Returns the number of shapes enqueued for this feature (per-tag shapes
/// plus at most one forest override shape).
///
/// Every enqueued shape's screen coordinates are folded into
/// `bounding_box` before the queue takes ownership. The coordinates are
/// still raw projected values at this point — scaling into pixel space
/// happens later, inside the rasterizer — so the box accumulates in the
/// same pre-scale space.
pub fn tessellate(
    feature: &MapFeature,
    bounding_box: &mut BoundingBox,
    queue: &mut DrawQueue,
) -> usize {
    let mut enqueued = 0;

    for key in feature.tags.keys() {
        let Some(tag) = TagKey::parse(key) else {
            trace!(key = %key, "unrecognized tag key, skipping");
            continue;
        };
        let Some(shape) = classify(tag, feature) else {
            continue;
        };
        enqueue(shape, bounding_box, queue);
        enqueued += 1;
    }

    if let Some(rule) = forest_override(feature) {
        debug!(rule, "forest override fired");
        let forest = Shape::GeoFeature(GeoFeature::new(
            feature.coordinates.clone(),
            GeoFeatureKind::Forest,
        ));
        enqueue(forest, bounding_box, queue);
        enqueued += 1;
    }

    enqueued
}

/// Fold a shape's extent into the box, then hand it to the queue.
fn enqueue(shape: Shape, bounding_box: &mut BoundingBox, queue: &mut DrawQueue) {
    bounding_box.extend_all(shape.screen_coordinates());
    queue.push(shape);
}

/// Which forest override rule applies to this feature, if any.
///
/// The boundary rule takes precedence; at most one rule fires per
/// feature. Matching is by prefix on both key and value, independent of
/// the per-tag classification pass (a `boundary=forest` tag yields both a
/// Border from classification and a Forest from the override).
fn forest_override(feature: &MapFeature) -> Option<&'static str> {
    if feature
        .tags
        .iter()
        .any(|(key, value)| key.starts_with("boundary") && value.starts_with("forest"))
    {
        Some("boundary")
    } else if feature.tags.iter().any(|(key, value)| {
        key.starts_with("landuse") && (value.starts_with("forest") || value.starts_with("orchard"))
    }) {
        Some("landuse")
    } else {
        None
    }
}
