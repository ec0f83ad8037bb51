//! Atomic counters for pipeline instrumentation.

use std::sync::atomic::{AtomicU64, Ordering};

use super::MetricsSnapshot;

/// Lock-free counters recorded as the pipeline runs.
///
/// All counters use relaxed ordering: they are statistics, not
/// synchronization, and a snapshot only needs per-counter consistency.
#[derive(Debug, Default)]
pub struct RenderMetrics {
    features_loaded: AtomicU64,
    shapes_enqueued: AtomicU64,
    tiles_rendered: AtomicU64,
}

impl RenderMetrics {
    /// Create zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record features handed to the tessellator.
    pub fn features_loaded(&self, count: u64) {
        self.features_loaded.fetch_add(count, Ordering::Relaxed);
    }

    /// Record shapes enqueued for drawing.
    pub fn shapes_enqueued(&self, count: u64) {
        self.shapes_enqueued.fetch_add(count, Ordering::Relaxed);
    }

    /// Record one completed tile render.
    pub fn tile_rendered(&self) {
        self.tiles_rendered.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            features_loaded: self.features_loaded.load(Ordering::Relaxed),
            shapes_enqueued: self.shapes_enqueued.load(Ordering::Relaxed),
            tiles_rendered: self.tiles_rendered.load(Ordering::Relaxed),
        }
    }
}
