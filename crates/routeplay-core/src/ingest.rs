//! Track-log ingestion: raw GPS fixes to a normalized point sequence.
//!
//! Ingestion is a pure transformation. [`gpx::parse_fixes`] extracts the
//! raw fixes from a GPX document; [`normalize_fixes`] downsamples them to
//! one fix per whole second, assigns dense elapsed-second indices, and
//! annotates leg and cumulative distances. Persisting the output is the
//! hosting application's responsibility.

pub mod gpx;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo::haversine_distance;
use crate::models::{GeoPosition, TrackPoint};

/// One raw position fix parsed from a track log, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFix {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Elevation in meters, when recorded
    pub elevation: Option<f64>,

    /// Recording timestamp. Fixes without a usable timestamp all share a
    /// single deduplication slot, so only the first of them survives.
    pub time: Option<DateTime<Utc>>,
}

/// The normalized output of ingesting one segment's track log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSequence {
    /// Retained points, ordered by their `second` index
    pub points: Vec<TrackPoint>,

    /// Final cumulative distance in meters; 0.0 for an empty sequence
    pub total_distance: f64,
}

impl TrackSequence {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ingest a GPX document into a normalized track sequence.
///
/// A document without any track points yields an empty sequence; only a
/// structurally unparseable document is an error.
pub fn ingest_track_log(text: &str) -> Result<TrackSequence> {
    let fixes = gpx::parse_fixes(text)?;
    Ok(normalize_fixes(&fixes))
}

/// Ingest a GPX file from disk.
pub fn ingest_track_log_file<P: AsRef<std::path::Path>>(path: P) -> Result<TrackSequence> {
    let text = std::fs::read_to_string(path)?;
    ingest_track_log(&text)
}

/// Normalize raw fixes into a [`TrackSequence`].
///
/// Deduplication truncates each timestamp to whole-second precision and
/// keeps the first fix observed for a given second, in input order: a
/// deliberate lossy downsample to one point per second. The `second`
/// index is an ordinal position (0, 1, 2, …) over the retained fixes; a
/// gap in recording time does not create a gap in the index.
pub fn normalize_fixes(fixes: &[RawFix]) -> TrackSequence {
    let mut seen: HashSet<Option<i64>> = HashSet::new();
    let mut points: Vec<TrackPoint> = Vec::new();
    let mut previous: Option<GeoPosition> = None;
    let mut total_distance = 0.0;

    for fix in fixes {
        let key = fix.time.map(|t| t.timestamp());
        if !seen.insert(key) {
            continue;
        }

        let here = GeoPosition::new(fix.latitude, fix.longitude);
        let segment_distance = match previous {
            Some(prev) => haversine_distance(prev, here),
            None => 0.0,
        };
        total_distance += segment_distance;

        points.push(TrackPoint {
            latitude: fix.latitude,
            longitude: fix.longitude,
            elevation: fix.elevation,
            second: points.len() as u32,
            segment_distance,
            total_distance,
        });
        previous = Some(here);
    }

    TrackSequence {
        points,
        total_distance,
    }
}
