//! Per-frame render context.

/// Scalar state for one frame render.
///
/// The pipeline carries no state between frames; time-varying artifacts
/// (grain animation, gate weave, breath, flicker) are pure functions of
/// this context plus the static parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Wall time of the frame in seconds.
    pub time: f64,
    /// Sequential frame index.
    pub frame_index: u64,
}

impl RenderContext {
    /// Creates a context for the given time and frame index.
    pub fn new(time: f64, frame_index: u64) -> Self {
        Self { time, frame_index }
    }

    /// Context for deterministic renders (time 0, frame 0).
    ///
    /// Used by the LUT baker and by tests that must not pick up any
    /// time-varying behavior.
    pub fn still() -> Self {
        Self { time: 0.0, frame_index: 0 }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::still()
    }
}
