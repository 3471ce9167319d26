use std::path::Path;

use anyhow::{Context, Result};
use routeplay_core::format::format_distance;
use routeplay_core::geo::{haversine_distance, nearest_index};
use routeplay_core::ingest::ingest_track_log_file;
use routeplay_core::models::GeoPosition;

use crate::output::OutputWriter;

pub fn run(output: &OutputWriter, file: &Path, lat: f64, lon: f64) -> Result<()> {
    let sequence = ingest_track_log_file(file)
        .with_context(|| format!("Failed to ingest {}", file.display()))?;

    let target = GeoPosition::new(lat, lon);
    let Some(index) = nearest_index(sequence.points.iter().map(|p| p.position()), target) else {
        output.info("Track log has no points");
        return Ok(());
    };

    let point = &sequence.points[index];
    let distance = haversine_distance(target, point.position());

    if output.is_json() {
        output.json(&serde_json::json!({
            "point": point,
            "distance_m": distance,
        }));
        return Ok(());
    }

    output.success(format!(
        "Nearest point: second {}, ({:.6}, {:.6}), chainage {}, {:.1} m from target",
        point.second,
        point.latitude,
        point.longitude,
        format_distance(point.total_distance),
        distance
    ));

    Ok(())
}
