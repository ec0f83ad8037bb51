//! Point-in-time view of pipeline metrics.

use std::fmt;

/// A copy of all pipeline counters at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Features handed to the tessellator.
    pub features_loaded: u64,
    /// Shapes enqueued for drawing.
    pub shapes_enqueued: u64,
    /// Completed tile renders.
    pub tiles_rendered: u64,
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} features, {} shapes, {} tiles",
            self.features_loaded, self.shapes_enqueued, self.tiles_rendered
        )
    }
}
