//! Synchronization events and the view commands they produce.

use routeplay_core::models::{GeoPosition, SegmentId};
use serde::{Deserialize, Serialize};

/// One playback-synchronization input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyncEvent {
    /// The video element reported its current playback time
    VideoTick { seconds: f64 },

    /// The video element reached the end of the current segment
    VideoEnded,

    /// The operator clicked the map or a marker
    SelectPosition { position: GeoPosition },

    /// The operator submitted a km+m distance search
    DistanceSearch { query: DistanceQuery },

    /// Manual navigation to the previous segment
    PreviousSegment,

    /// Manual navigation to the next segment
    NextSegment,

    /// Manual navigation to a specific segment index
    GoToSegment { index: u32 },
}

/// Operator-entered "km + m" distance, either part optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceQuery {
    pub km: Option<u32>,
    pub m: Option<u32>,
}

impl DistanceQuery {
    pub fn new(km: impl Into<Option<u32>>, m: impl Into<Option<u32>>) -> Self {
        Self {
            km: km.into(),
            m: m.into(),
        }
    }

    /// The search is disabled while both parts are empty.
    pub fn is_empty(&self) -> bool {
        self.km.is_none() && self.m.is_none()
    }

    /// Target distance in meters; empty parts count as 0.
    pub fn target_meters(&self) -> f64 {
        f64::from(self.km.unwrap_or(0)) * 1000.0 + f64::from(self.m.unwrap_or(0))
    }
}

/// One rendering instruction emitted when the cursor changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewCommand {
    /// The video view must swap to this segment's source, starting at 0 s
    LoadSegment { segment: SegmentId, index: u32 },

    /// The video view must seek to this time within the current segment
    SeekVideo { seconds: f64 },

    /// The map view must center on and highlight this position
    CenterMap { position: GeoPosition },

    /// The distance indicator must show this absolute route distance
    ShowDistance { meters: f64, formatted: String },
}
