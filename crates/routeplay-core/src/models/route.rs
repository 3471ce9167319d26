use serde::{Deserialize, Serialize};

use super::point::GeoPosition;

/// An absolute-distance reference point along the whole route, supplied
/// per collection by the hosting application.
///
/// Used to translate an operator-entered "km + m" chainage into a
/// geographic point; read-only input to the playback coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLocation {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Absolute route distance in meters; a missing value counts as 0
    pub meter: Option<f64>,
}

impl ReferenceLocation {
    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.latitude, self.longitude)
    }
}
