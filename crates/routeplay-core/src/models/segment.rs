use serde::{Deserialize, Serialize};

use super::point::TrackPoint;

/// Unique identifier for a video segment, assigned by the hosting application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub u64);

/// One video file belonging to an ordered collection, together with the
/// track points ingested from its GPS log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSegment {
    /// Identity
    pub id: SegmentId,

    /// Position within the collection, zero-based
    pub order: u32,

    /// Optional descriptive start-place name
    pub place_name: Option<String>,

    /// Ingested track points, ordered by `second`
    pub points: Vec<TrackPoint>,
}

/// An ordered collection of video segments covering one route.
///
/// Segments are kept sorted by their order index so that positional
/// indexing matches playback order. Duplicate or gapped order indices
/// degrade sequential auto-advance but never panic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoCollection {
    segments: Vec<VideoSegment>,
}

impl VideoCollection {
    /// Build a collection, ordering segments by their order index ascending.
    pub fn new(mut segments: Vec<VideoSegment>) -> Self {
        segments.sort_by_key(|s| s.order);
        Self { segments }
    }

    pub fn segments(&self) -> &[VideoSegment] {
        &self.segments
    }

    pub fn segment_at(&self, index: usize) -> Option<&VideoSegment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: u64, order: u32) -> VideoSegment {
        VideoSegment {
            id: SegmentId(id),
            order,
            place_name: None,
            points: Vec::new(),
        }
    }

    #[test]
    fn test_collection_sorts_by_order() {
        let collection = VideoCollection::new(vec![segment(3, 2), segment(1, 0), segment(2, 1)]);

        let ids: Vec<u64> = collection.segments().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(collection.segment_at(1).unwrap().id, SegmentId(2));
        assert!(collection.segment_at(3).is_none());
    }
}
