use thiserror::Error;

/// Errors surfaced by the guidance engine.
///
/// All of these are local and recoverable: they are returned as values to
/// the command layer or the frame loop, never propagated in a way that
/// would stop the guidance loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuidanceError {
    /// `start` was called for the item that is already being guided.
    #[error("already guiding {0}")]
    AlreadyActive(String),

    /// A detection sample arrived with a timestamp older than the last
    /// processed frame. The frame must be discarded rather than regress
    /// tracked state.
    #[error("stale sample: frame at {frame_time}s is older than last processed frame at {last_frame_time}s")]
    StaleSample { frame_time: f64, last_frame_time: f64 },
}
