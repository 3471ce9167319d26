use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One ingested GPS fix within a video segment.
///
/// Produced in bulk by track-log ingestion and replaced wholesale when a
/// segment's log is re-ingested. Points are ordered by their `second`
/// index; `total_distance` is monotonically non-decreasing along that
/// order, and the first point of a segment carries 0.0 for both distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Elevation in meters, when the source fix carried one
    pub elevation: Option<f64>,

    /// Elapsed-seconds index within the segment.
    ///
    /// This is an ordinal position over the retained fixes (0, 1, 2, …),
    /// not a timestamp difference: a gap in recording time does not
    /// create a gap in the index.
    pub second: u32,

    /// Distance in meters from the previous retained point
    pub segment_distance: f64,

    /// Cumulative distance in meters from the start of the segment
    pub total_distance: f64,
}

impl TrackPoint {
    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.latitude, self.longitude)
    }
}
