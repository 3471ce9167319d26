//! Distance display helpers.
//!
//! Route distances are shown to operators as "km+m" chainage strings
//! (e.g. `5+500.000` for 5 500 m), the convention used on the physical
//! route markers the footage documents.

use crate::models::TrackPoint;

/// Default cap on distance autocomplete suggestions.
pub const SUGGESTION_LIMIT: usize = 30;

/// Format a distance in meters as a "km+m" chainage string.
pub fn format_distance(meters: f64) -> String {
    let km = (meters / 1000.0).floor();
    let m = meters % 1000.0;
    format!("{}+{:.3}", km, m)
}

/// Points whose formatted absolute distance contains `query`.
///
/// The absolute distance of a point is `route_offset_m` plus its
/// cumulative segment distance. Matching is a case-insensitive substring
/// test against the formatted chainage, capped at `limit` results.
pub fn matching_points<'a>(
    points: &'a [TrackPoint],
    route_offset_m: f64,
    query: &str,
    limit: usize,
) -> Vec<&'a TrackPoint> {
    let needle = query.trim().to_lowercase();

    points
        .iter()
        .filter(|p| {
            format_distance(route_offset_m + p.total_distance)
                .to_lowercase()
                .contains(&needle)
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(second: u32, total_distance: f64) -> TrackPoint {
        TrackPoint {
            latitude: 0.0,
            longitude: 0.0,
            elevation: None,
            second,
            segment_distance: 0.0,
            total_distance,
        }
    }

    #[test]
    fn test_format_distance_zero() {
        assert_eq!(format_distance(0.0), "0+0.000");
    }

    #[test]
    fn test_format_distance_splits_km_and_m() {
        assert_eq!(format_distance(5500.0), "5+500.000");
        assert_eq!(format_distance(12_034.5), "12+34.500");
        assert_eq!(format_distance(999.75), "0+999.750");
    }

    #[test]
    fn test_matching_points_filters_by_chainage_text() {
        let points = vec![point(0, 0.0), point(1, 500.0), point(2, 1500.0)];

        let matches = matching_points(&points, 5000.0, "5+500", SUGGESTION_LIMIT);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].second, 1);
    }

    #[test]
    fn test_matching_points_respects_limit() {
        let points: Vec<TrackPoint> = (0..100).map(|i| point(i, i as f64)).collect();

        let matches = matching_points(&points, 0.0, "0+", 30);
        assert_eq!(matches.len(), 30);
    }

    #[test]
    fn test_matching_points_empty_query_matches_everything() {
        let points = vec![point(0, 0.0), point(1, 10.0)];

        let matches = matching_points(&points, 0.0, "", SUGGESTION_LIMIT);
        assert_eq!(matches.len(), 2);
    }
}
