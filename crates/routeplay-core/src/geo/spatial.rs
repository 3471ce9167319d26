use geo::algorithm::bounding_rect::BoundingRect;
use geo::{Coord, LineString, Rect};

use crate::models::GeoPosition;

/// Earth radius in meters used for all great-circle math.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two WGS84 positions.
///
/// Haversine formula over a spherical Earth of radius [`EARTH_RADIUS_M`].
pub fn haversine_distance(a: GeoPosition, b: GeoPosition) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Index of the candidate geographically closest to `target`.
///
/// Exhaustive scan over every candidate; ties are broken in favor of the
/// first candidate in iteration order, so results are deterministic.
/// Returns `None` for an empty input.
pub fn nearest_index<I>(candidates: I, target: GeoPosition) -> Option<usize>
where
    I: IntoIterator<Item = GeoPosition>,
{
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = haversine_distance(target, candidate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

/// Total length in meters of a polyline of positions.
///
/// Sums the haversine distance between consecutive positions. Empty and
/// single-position polylines have length 0.0.
pub fn polyline_length(positions: &[GeoPosition]) -> f64 {
    if positions.len() < 2 {
        return 0.0;
    }

    positions
        .windows(2)
        .map(|w| haversine_distance(w[0], w[1]))
        .sum()
}

/// Bounding rectangle of a set of positions, for initial map fitting.
///
/// Returns `None` when there are no positions.
pub fn route_bounds(positions: &[GeoPosition]) -> Option<Rect<f64>> {
    if positions.is_empty() {
        return None;
    }

    let line: LineString<f64> = positions
        .iter()
        .map(|p| Coord {
            x: p.longitude,
            y: p.latitude,
        })
        .collect();

    line.bounding_rect()
}
