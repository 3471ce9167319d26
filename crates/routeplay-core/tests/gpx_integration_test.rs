//! Integration tests for the track-log ingestion pipeline

use routeplay_core::ingest::{ingest_track_log, ingest_track_log_file};
use routeplay_core::RouteplayError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_ingest_complete_track_log() {
    // Five fixes: the second duplicates the first fix's whole second and
    // must be dropped; the remaining four land one second apart.
    let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <name>Inspection run</name>
    <trkseg>
      <trkpt lat="47.644548" lon="-122.326897">
        <ele>4.46</ele>
        <time>2023-05-01T10:00:00.000Z</time>
      </trkpt>
      <trkpt lat="47.644560" lon="-122.326910">
        <ele>4.47</ele>
        <time>2023-05-01T10:00:00.700Z</time>
      </trkpt>
      <trkpt lat="47.644649" lon="-122.326998">
        <ele>4.50</ele>
        <time>2023-05-01T10:00:01.000Z</time>
      </trkpt>
      <trkpt lat="47.644750" lon="-122.327099">
        <ele>4.60</ele>
        <time>2023-05-01T10:00:02.000Z</time>
      </trkpt>
      <trkpt lat="47.644851" lon="-122.327200">
        <ele>4.70</ele>
        <time>2023-05-01T10:00:03.000Z</time>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    let sequence = ingest_track_log(gpx_content).unwrap();

    assert_eq!(sequence.len(), 4);

    // Dense ordinal indices
    let seconds: Vec<u32> = sequence.points.iter().map(|p| p.second).collect();
    assert_eq!(seconds, vec![0, 1, 2, 3]);

    // The duplicate second kept the first fix in document order
    assert_eq!(sequence.points[0].latitude, 47.644548);
    assert_eq!(sequence.points[0].elevation, Some(4.46));

    // First point carries zero distances; the rest accumulate
    assert_eq!(sequence.points[0].segment_distance, 0.0);
    assert_eq!(sequence.points[0].total_distance, 0.0);
    for window in sequence.points.windows(2) {
        assert!(window[1].segment_distance > 0.0);
        assert!(window[1].total_distance >= window[0].total_distance);
    }

    // The reported total is the last cumulative value
    assert_eq!(
        sequence.total_distance,
        sequence.points.last().unwrap().total_distance
    );

    // Consecutive fixes ~15 m apart; total should be in the tens of meters
    assert!(sequence.total_distance > 10.0 && sequence.total_distance < 100.0);
}

#[test]
fn test_ingest_empty_document() {
    let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
</gpx>"#;

    let sequence = ingest_track_log(gpx_content).unwrap();
    assert!(sequence.is_empty());
    assert_eq!(sequence.total_distance, 0.0);
}

#[test]
fn test_ingest_track_without_points() {
    let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <name>Empty track</name>
    <trkseg>
    </trkseg>
  </trk>
</gpx>"#;

    let sequence = ingest_track_log(gpx_content).unwrap();
    assert!(sequence.is_empty());
    assert_eq!(sequence.total_distance, 0.0);
}

#[test]
fn test_ingest_malformed_document_fails() {
    let result = ingest_track_log("<gpx><trk><unclosed");
    assert!(matches!(
        result,
        Err(RouteplayError::MalformedTrackLog { .. })
    ));
}

#[test]
fn test_ingest_recording_gap_keeps_indices_dense() {
    // One minute of dropped fixes between the second and third point
    let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <trkseg>
      <trkpt lat="47.6440" lon="-122.3260">
        <time>2023-05-01T10:00:00Z</time>
      </trkpt>
      <trkpt lat="47.6441" lon="-122.3261">
        <time>2023-05-01T10:00:01Z</time>
      </trkpt>
      <trkpt lat="47.6450" lon="-122.3270">
        <time>2023-05-01T10:01:01Z</time>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    let sequence = ingest_track_log(gpx_content).unwrap();
    let seconds: Vec<u32> = sequence.points.iter().map(|p| p.second).collect();
    assert_eq!(seconds, vec![0, 1, 2]);
}

#[test]
fn test_ingest_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("run.gpx");

    let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <trkseg>
      <trkpt lat="47.6440" lon="-122.3260">
        <time>2023-05-01T10:00:00Z</time>
      </trkpt>
      <trkpt lat="47.6441" lon="-122.3261">
        <time>2023-05-01T10:00:01Z</time>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    fs::write(&file_path, gpx_content).unwrap();

    let sequence = ingest_track_log_file(&file_path).unwrap();
    assert_eq!(sequence.len(), 2);
    assert!(sequence.total_distance > 0.0);
}

#[test]
fn test_ingest_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ingest_track_log_file(temp_dir.path().join("absent.gpx"));
    assert!(matches!(result, Err(RouteplayError::Io(_))));
}

#[test]
fn test_sequence_survives_json_persistence() {
    // The hosting application persists ingestion output as JSON and
    // loads it back per segment
    let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <trkseg>
      <trkpt lat="47.6440" lon="-122.3260">
        <ele>12.5</ele>
        <time>2023-05-01T10:00:00Z</time>
      </trkpt>
      <trkpt lat="47.6441" lon="-122.3261">
        <time>2023-05-01T10:00:01Z</time>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    let sequence = ingest_track_log(gpx_content).unwrap();
    let json = serde_json::to_string(&sequence).unwrap();
    let restored: routeplay_core::ingest::TrackSequence = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, sequence);
    assert_eq!(restored.points[0].elevation, Some(12.5));
}
