//! Pipeline telemetry for observability and user feedback.
//!
//! Lock-free atomic counters recorded while tiles are produced, with a
//! point-in-time snapshot for display.
//!
//! ```text
//! Pipeline ─────► RenderMetrics ─────► MetricsSnapshot ─────► views (CLI)
//!                 (atomic counters)    (point-in-time copy)
//! ```

mod metrics;
mod snapshot;

pub use metrics::RenderMetrics;
pub use snapshot::MetricsSnapshot;
