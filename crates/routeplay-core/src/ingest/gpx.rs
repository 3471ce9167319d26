use chrono::{DateTime, Utc};
use gpx::read;

use crate::error::{Result, RouteplayError};

use super::RawFix;

/// Parse every track point in a GPX document, in document order.
///
/// Points are collected across all tracks and track segments. A document
/// with no tracks is not an error; it simply yields no fixes.
pub fn parse_fixes(text: &str) -> Result<Vec<RawFix>> {
    let document = read(text.as_bytes()).map_err(|e| RouteplayError::MalformedTrackLog {
        reason: e.to_string(),
    })?;

    let mut fixes = Vec::new();
    for track in &document.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                let point = waypoint.point();
                fixes.push(RawFix {
                    latitude: point.y(),
                    longitude: point.x(),
                    elevation: waypoint.elevation,
                    time: waypoint.time.and_then(parse_time),
                });
            }
        }
    }

    Ok(fixes)
}

/// Convert a GPX timestamp to UTC.
///
/// An unreadable timestamp is downgraded to "absent" with a warning
/// rather than failing the whole document.
fn parse_time(time: gpx::Time) -> Option<DateTime<Utc>> {
    let formatted = match time.format() {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Unreadable GPX timestamp: {}", e);
            return None;
        }
    };

    match DateTime::parse_from_rfc3339(&formatted) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!("GPX timestamp '{}' is not RFC 3339: {}", formatted, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixes_basic_track() {
        let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <name>Survey run</name>
    <trkseg>
      <trkpt lat="47.644548" lon="-122.326897">
        <ele>4.46</ele>
        <time>2023-05-01T10:00:00Z</time>
      </trkpt>
      <trkpt lat="47.644649" lon="-122.326998">
        <ele>4.50</ele>
        <time>2023-05-01T10:00:01Z</time>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;

        let fixes = parse_fixes(gpx_content).unwrap();
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].latitude, 47.644548);
        assert_eq!(fixes[0].longitude, -122.326897);
        assert_eq!(fixes[0].elevation, Some(4.46));
        assert!(fixes[0].time.is_some());
        assert_eq!(
            fixes[1].time.unwrap().timestamp() - fixes[0].time.unwrap().timestamp(),
            1
        );
    }

    #[test]
    fn test_parse_fixes_no_tracks_is_empty() {
        let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <wpt lat="47.644548" lon="-122.326897">
    <name>Lone waypoint</name>
  </wpt>
</gpx>"#;

        let fixes = parse_fixes(gpx_content).unwrap();
        assert!(fixes.is_empty());
    }

    #[test]
    fn test_parse_fixes_multiple_segments_in_document_order() {
        let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <trkseg>
      <trkpt lat="47.0" lon="-122.0"/>
    </trkseg>
    <trkseg>
      <trkpt lat="48.0" lon="-123.0"/>
    </trkseg>
  </trk>
</gpx>"#;

        let fixes = parse_fixes(gpx_content).unwrap();
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].latitude, 47.0);
        assert_eq!(fixes[1].latitude, 48.0);
    }

    #[test]
    fn test_parse_fixes_malformed_document() {
        let result = parse_fixes("not a gpx document");
        assert!(matches!(
            result,
            Err(RouteplayError::MalformedTrackLog { .. })
        ));
    }

    #[test]
    fn test_parse_fixes_missing_time_is_none() {
        let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <trkseg>
      <trkpt lat="47.0" lon="-122.0"/>
    </trkseg>
  </trk>
</gpx>"#;

        let fixes = parse_fixes(gpx_content).unwrap();
        assert_eq!(fixes.len(), 1);
        assert!(fixes[0].time.is_none());
    }
}
