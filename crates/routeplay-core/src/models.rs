//! Domain models shared across the routeplay crates.

pub mod cursor;
pub mod point;
pub mod route;
pub mod segment;

pub use cursor::PlaybackCursor;
pub use point::{GeoPosition, TrackPoint};
pub use route::ReferenceLocation;
pub use segment::{SegmentId, VideoCollection, VideoSegment};
