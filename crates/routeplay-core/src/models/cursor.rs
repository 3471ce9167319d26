use serde::{Deserialize, Serialize};

use super::segment::SegmentId;

/// The single authoritative playback position shared by all views.
///
/// Created once per viewing session at (first segment, 0 s) and mutated
/// by every synchronization event; `seconds` stays within the segment's
/// duration in steady state but may transiently exceed it during a seek.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackCursor {
    /// Identity of the active segment
    pub segment: SegmentId,

    /// Order index of the active segment within the collection
    pub segment_index: u32,

    /// Elapsed seconds within the active segment
    pub seconds: f64,
}
