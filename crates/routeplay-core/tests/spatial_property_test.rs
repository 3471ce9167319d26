//! Property tests for the nearest-point search

use proptest::prelude::*;
use routeplay_core::geo::{haversine_distance, nearest_index};
use routeplay_core::models::GeoPosition;

fn position_strategy() -> impl Strategy<Value = GeoPosition> {
    (-80.0f64..80.0, -179.0f64..179.0).prop_map(|(lat, lon)| GeoPosition::new(lat, lon))
}

proptest! {
    #[test]
    fn prop_nearest_is_no_farther_than_any_candidate(
        candidates in proptest::collection::vec(position_strategy(), 1..40),
        target in position_strategy(),
    ) {
        let index = nearest_index(candidates.iter().copied(), target).unwrap();
        let best = haversine_distance(target, candidates[index]);

        for candidate in &candidates {
            prop_assert!(best <= haversine_distance(target, *candidate));
        }
    }

    #[test]
    fn prop_nearest_prefers_first_on_equal_distance(
        candidates in proptest::collection::vec(position_strategy(), 1..20),
        target in position_strategy(),
    ) {
        let index = nearest_index(candidates.iter().copied(), target).unwrap();
        let best = haversine_distance(target, candidates[index]);

        // No earlier candidate achieves the winning distance
        for candidate in &candidates[..index] {
            prop_assert!(haversine_distance(target, *candidate) > best);
        }
    }
}
