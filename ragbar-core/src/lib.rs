//! RagBar Core — threshold model, drag controller and zone projection.
//!
//! This crate contains everything about the bar that is not drawing:
//! - Three ordered thresholds with a minimum gap ([`thresholds`])
//! - Press/move/release state machine driving one threshold ([`drag`])
//! - Capture seam for global pointer events ([`capture`])
//! - Segments, handle positions and labels for renderers ([`zones`])
//! - TOML configuration ([`config`])

pub mod capture;
pub mod config;
pub mod drag;
pub mod thresholds;
pub mod zones;

pub use capture::{CountingCapture, PointerCapture};
pub use config::{ConfigError, RagbarConfig};
pub use drag::{DragController, DragSession, TrackSurface};
pub use thresholds::{compute_value, Threshold, ThresholdError, ThresholdSet, MIN_GAP};
pub use zones::{Segment, Zone};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: core types can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ThresholdSet>();
        require_sync::<ThresholdSet>();
        require_send::<Threshold>();
        require_sync::<Threshold>();
        require_send::<TrackSurface>();
        require_sync::<TrackSurface>();
        require_send::<DragSession>();
        require_sync::<DragSession>();
        require_send::<DragController<CountingCapture>>();
        require_sync::<DragController<CountingCapture>>();
        require_send::<Segment>();
        require_sync::<Segment>();
        require_send::<RagbarConfig>();
        require_sync::<RagbarConfig>();
        require_send::<ConfigError>();
        require_sync::<ConfigError>();
    }
}
