//! Routeplay Core - Domain models, geodesy, and track-log ingestion
//!
//! This crate contains the data model shared by every routeplay component
//! (track points, video segments, the playback cursor), the great-circle
//! math used for distance annotation and nearest-point queries, and the
//! ingestion pipeline that turns a raw GPX document into a deduplicated,
//! distance-annotated point sequence.

pub mod error;
pub mod format;
pub mod geo;
pub mod ingest;
pub mod legend;
pub mod models;

pub use error::{Result, RouteplayError};
