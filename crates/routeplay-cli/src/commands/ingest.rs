use std::path::Path;

use anyhow::{Context, Result};
use routeplay_core::format::format_distance;
use routeplay_core::geo::route_bounds;
use routeplay_core::ingest::ingest_track_log_file;
use routeplay_core::models::GeoPosition;
use tabled::{settings::Style, Table, Tabled};

use crate::output::OutputWriter;

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Second")]
    second: u32,
    #[tabled(rename = "Latitude")]
    latitude: f64,
    #[tabled(rename = "Longitude")]
    longitude: f64,
    #[tabled(rename = "Leg (m)")]
    segment_distance: String,
    #[tabled(rename = "Chainage")]
    chainage: String,
}

pub fn run(
    output: &OutputWriter,
    file: &Path,
    points: bool,
    limit: usize,
    offset_m: f64,
) -> Result<()> {
    let sequence = ingest_track_log_file(file)
        .with_context(|| format!("Failed to ingest {}", file.display()))?;

    let positions: Vec<GeoPosition> = sequence.points.iter().map(|p| p.position()).collect();
    let bounds = route_bounds(&positions);

    if output.is_json() {
        output.json(&serde_json::json!({
            "file": file.display().to_string(),
            "point_count": sequence.len(),
            "total_distance_m": sequence.total_distance,
            "total_chainage": format_distance(offset_m + sequence.total_distance),
            "bounds": bounds.map(|b| serde_json::json!({
                "min_lat": b.min().y,
                "max_lat": b.max().y,
                "min_lon": b.min().x,
                "max_lon": b.max().x,
            })),
            "points": sequence.points,
        }));
        return Ok(());
    }

    output.success(format!(
        "Ingested {} points, total distance {:.2} m (chainage {})",
        sequence.len(),
        sequence.total_distance,
        format_distance(offset_m + sequence.total_distance)
    ));

    if let Some(b) = bounds {
        output.info(format!(
            "Bounds: {:.5}..{:.5} lat, {:.5}..{:.5} lon",
            b.min().y,
            b.max().y,
            b.min().x,
            b.max().x
        ));
    }

    if points && !sequence.is_empty() {
        let rows: Vec<PointRow> = sequence
            .points
            .iter()
            .take(limit)
            .map(|p| PointRow {
                second: p.second,
                latitude: p.latitude,
                longitude: p.longitude,
                segment_distance: format!("{:.2}", p.segment_distance),
                chainage: format_distance(offset_m + p.total_distance),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);

        if sequence.len() > limit {
            output.info(format!("… {} more points not shown", sequence.len() - limit));
        }
    }

    Ok(())
}
