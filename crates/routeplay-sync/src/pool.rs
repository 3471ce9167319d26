//! Pooled cross-segment point projection.
//!
//! Click and search events may land anywhere on the combined route, so
//! every track point of every segment is a candidate regardless of which
//! segment is active. The pool is a derived projection of the collection:
//! it is built when the segment list changes and reused across cursor
//! ticks, never recomputed per event.

use routeplay_core::geo::nearest_index;
use routeplay_core::models::{GeoPosition, SegmentId, VideoCollection};

/// One track point tagged with the segment it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PooledPoint {
    pub segment: SegmentId,
    pub segment_index: u32,
    pub position: GeoPosition,
    pub second: u32,
    pub total_distance: f64,
}

/// Flattened union of every segment's points, in segment-then-second order.
#[derive(Debug, Default)]
pub struct PointPool {
    points: Vec<PooledPoint>,
}

impl PointPool {
    pub fn from_collection(collection: &VideoCollection) -> Self {
        let mut pool = Self::default();
        pool.rebuild(collection);
        pool
    }

    /// Re-derive the pool after the segment list changed.
    pub fn rebuild(&mut self, collection: &VideoCollection) {
        self.points.clear();
        for (index, segment) in collection.segments().iter().enumerate() {
            for point in &segment.points {
                self.points.push(PooledPoint {
                    segment: segment.id,
                    segment_index: index as u32,
                    position: point.position(),
                    second: point.second,
                    total_distance: point.total_distance,
                });
            }
        }
    }

    pub fn points(&self) -> &[PooledPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pooled point geographically closest to `target`, across every
    /// segment. The first candidate in pool order wins ties.
    pub fn nearest(&self, target: GeoPosition) -> Option<&PooledPoint> {
        nearest_index(self.points.iter().map(|p| p.position), target)
            .map(|index| &self.points[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeplay_core::models::{TrackPoint, VideoSegment};

    fn point(latitude: f64, longitude: f64, second: u32) -> TrackPoint {
        TrackPoint {
            latitude,
            longitude,
            elevation: None,
            second,
            segment_distance: 0.0,
            total_distance: second as f64 * 10.0,
        }
    }

    fn collection() -> VideoCollection {
        VideoCollection::new(vec![
            VideoSegment {
                id: SegmentId(1),
                order: 0,
                place_name: None,
                points: vec![point(51.500, -0.130, 0), point(51.501, -0.130, 1)],
            },
            VideoSegment {
                id: SegmentId(2),
                order: 1,
                place_name: None,
                points: vec![point(51.510, -0.130, 0)],
            },
        ])
    }

    #[test]
    fn test_pool_flattens_in_segment_order() {
        let pool = PointPool::from_collection(&collection());

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.points()[0].segment, SegmentId(1));
        assert_eq!(pool.points()[2].segment, SegmentId(2));
        assert_eq!(pool.points()[2].segment_index, 1);
    }

    #[test]
    fn test_nearest_crosses_segment_boundaries() {
        let pool = PointPool::from_collection(&collection());

        // Closest to the second collection's only point
        let hit = pool.nearest(GeoPosition::new(51.5099, -0.1300)).unwrap();
        assert_eq!(hit.segment, SegmentId(2));
        assert_eq!(hit.second, 0);
    }

    #[test]
    fn test_nearest_on_empty_pool() {
        let pool = PointPool::from_collection(&VideoCollection::new(Vec::new()));
        assert!(pool.nearest(GeoPosition::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_rebuild_replaces_points() {
        let mut pool = PointPool::from_collection(&collection());
        pool.rebuild(&VideoCollection::new(Vec::new()));
        assert!(pool.is_empty());
    }
}
