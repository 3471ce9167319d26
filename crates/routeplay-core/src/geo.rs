//! Great-circle math shared by ingestion and playback synchronization.

pub mod spatial;

pub use spatial::{
    haversine_distance, nearest_index, polyline_length, route_bounds, EARTH_RADIUS_M,
};
