//! The playback synchronization coordinator.
//!
//! The coordinator owns the single [`PlaybackCursor`] and recomputes it
//! from five event sources: video time ticks, end-of-segment signals,
//! map/marker clicks, distance searches, and manual segment navigation.
//! Exactly one source is authoritative at a time. While the video plays,
//! its ticks drive the cursor and are never echoed back as seeks; when a
//! click, search, or navigation sets the cursor, the video is told to
//! seek and ticks are suppressed for a short settle window so the stale
//! pre-seek times cannot override the just-set cursor.

use std::time::Instant;

use routeplay_core::format::format_distance;
use routeplay_core::models::{
    GeoPosition, PlaybackCursor, ReferenceLocation, TrackPoint, VideoCollection,
};

use crate::config::SyncConfig;
use crate::events::{DistanceQuery, SyncEvent, ViewCommand};
use crate::pool::{PointPool, PooledPoint};

pub struct Coordinator {
    collection: VideoCollection,
    references: Vec<ReferenceLocation>,
    /// External offset in meters added to segment-relative distances for display
    route_offset_m: f64,
    config: SyncConfig,
    pool: PointPool,
    /// None only when the collection has no segments
    cursor: Option<PlaybackCursor>,
    /// Raw video position from the most recent accepted tick
    last_video_position: Option<f64>,
    /// Ticks are ignored until this deadline after an externally driven seek
    settle_until: Option<Instant>,
    /// Set once a VideoEnded has been handled for the current segment
    ended_latched: bool,
}

impl Coordinator {
    /// Create a coordinator with its cursor at (first segment, 0 s).
    pub fn new(collection: VideoCollection, config: SyncConfig) -> Self {
        let pool = PointPool::from_collection(&collection);
        let cursor = collection.segment_at(0).map(|segment| PlaybackCursor {
            segment: segment.id,
            segment_index: 0,
            seconds: 0.0,
        });

        Self {
            collection,
            references: Vec::new(),
            route_offset_m: 0.0,
            config,
            pool,
            cursor,
            last_video_position: None,
            settle_until: None,
            ended_latched: false,
        }
    }

    /// Attach the route's absolute-distance reference locations.
    pub fn with_references(mut self, references: Vec<ReferenceLocation>) -> Self {
        self.references = references;
        self
    }

    /// Set the external route offset added to displayed distances.
    pub fn with_route_offset(mut self, meters: f64) -> Self {
        self.route_offset_m = meters;
        self
    }

    pub fn cursor(&self) -> Option<&PlaybackCursor> {
        self.cursor.as_ref()
    }

    pub fn collection(&self) -> &VideoCollection {
        &self.collection
    }

    pub fn pool(&self) -> &PointPool {
        &self.pool
    }

    /// Replace the segment list, e.g. after re-ingestion.
    ///
    /// Resets the session to (first segment, 0 s) and rebuilds the pooled
    /// projection; this is the only operation that invalidates the pool.
    pub fn set_collection(&mut self, collection: VideoCollection) {
        self.pool.rebuild(&collection);
        self.cursor = collection.segment_at(0).map(|segment| PlaybackCursor {
            segment: segment.id,
            segment_index: 0,
            seconds: 0.0,
        });
        self.collection = collection;
        self.last_video_position = None;
        self.settle_until = None;
        self.ended_latched = false;
    }

    /// Handle one event with the current wall clock.
    pub fn apply(&mut self, event: SyncEvent) -> Vec<ViewCommand> {
        self.apply_at(event, Instant::now())
    }

    /// Handle one event at an explicit instant.
    ///
    /// The clock is a parameter so the seek-settle window is testable.
    /// The cursor is read and rewritten within this single call; commands
    /// are produced only after it has reached its final value.
    pub fn apply_at(&mut self, event: SyncEvent, now: Instant) -> Vec<ViewCommand> {
        match event {
            SyncEvent::VideoTick { seconds } => self.on_tick(seconds, now),
            SyncEvent::VideoEnded => self.on_ended(now),
            SyncEvent::SelectPosition { position } => self.on_select_position(position, now),
            SyncEvent::DistanceSearch { query } => self.on_distance_search(query, now),
            SyncEvent::PreviousSegment => {
                let Some(cursor) = self.cursor else {
                    return Vec::new();
                };
                match cursor.segment_index.checked_sub(1) {
                    Some(target) => self.on_go_to(target as usize, now),
                    None => Vec::new(),
                }
            }
            SyncEvent::NextSegment => {
                let Some(cursor) = self.cursor else {
                    return Vec::new();
                };
                self.on_go_to(cursor.segment_index as usize + 1, now)
            }
            SyncEvent::GoToSegment { index } => self.on_go_to(index as usize, now),
        }
    }

    fn on_tick(&mut self, seconds: f64, now: Instant) -> Vec<ViewCommand> {
        let mut cursor = match self.cursor {
            Some(cursor) => cursor,
            None => return Vec::new(),
        };

        // Inside the settle window the video is still converging on an
        // externally set cursor; its times are stale.
        if let Some(deadline) = self.settle_until {
            if now < deadline {
                return Vec::new();
            }
            self.settle_until = None;
        }

        self.last_video_position = Some(seconds);
        self.ended_latched = false;

        let resolution = self.config.tick_resolution.value;
        let rounded = (seconds / resolution).round() * resolution;
        if rounded == cursor.seconds {
            return Vec::new();
        }

        cursor.seconds = rounded;
        self.cursor = Some(cursor);

        let mut commands = Vec::new();
        if let Some(segment) = self.collection.segment_at(cursor.segment_index as usize) {
            if let Some(point) = nearest_by_second(&segment.points, rounded) {
                commands.push(ViewCommand::CenterMap {
                    position: point.position(),
                });
                commands.push(self.show_distance(point.total_distance));
            }
        }
        commands
    }

    fn on_ended(&mut self, now: Instant) -> Vec<ViewCommand> {
        let Some(cursor) = self.cursor else {
            return Vec::new();
        };

        if self.ended_latched {
            return Vec::new();
        }
        self.ended_latched = true;

        let next_index = cursor.segment_index as usize + 1;
        let Some(next) = self.collection.segment_at(next_index) else {
            tracing::debug!("end of last segment reached, staying");
            return Vec::new();
        };

        let next_id = next.id;
        let first_point = next.points.first().cloned();

        self.cursor = Some(PlaybackCursor {
            segment: next_id,
            segment_index: next_index as u32,
            seconds: 0.0,
        });
        self.last_video_position = None;
        self.settle_until = Some(now + self.config.settle_window.value);
        tracing::debug!(segment = next_id.0, index = next_index, "auto-advancing");

        let mut commands = vec![ViewCommand::LoadSegment {
            segment: next_id,
            index: next_index as u32,
        }];
        if let Some(point) = first_point {
            commands.push(ViewCommand::CenterMap {
                position: point.position(),
            });
            commands.push(self.show_distance(point.total_distance));
        }
        commands
    }

    fn on_select_position(&mut self, position: GeoPosition, now: Instant) -> Vec<ViewCommand> {
        if self.cursor.is_none() {
            return Vec::new();
        }

        let target = match self.pool.nearest(position) {
            Some(point) => point.clone(),
            None => return Vec::new(),
        };

        self.jump_to_point(&target, now)
    }

    fn on_distance_search(&mut self, query: DistanceQuery, now: Instant) -> Vec<ViewCommand> {
        if query.is_empty() || self.cursor.is_none() {
            return Vec::new();
        }

        let reference_position =
            match nearest_reference(&self.references, query.target_meters()) {
                Some(reference) => reference.position(),
                None => return Vec::new(),
            };

        let target = match self.pool.nearest(reference_position) {
            Some(point) => point.clone(),
            None => return Vec::new(),
        };

        self.jump_to_point(&target, now)
    }

    fn on_go_to(&mut self, index: usize, now: Instant) -> Vec<ViewCommand> {
        if self.cursor.is_none() {
            return Vec::new();
        }

        let Some(segment) = self.collection.segment_at(index) else {
            return Vec::new();
        };

        let segment_id = segment.id;
        let first_point = segment.points.first().cloned();

        self.cursor = Some(PlaybackCursor {
            segment: segment_id,
            segment_index: index as u32,
            seconds: 0.0,
        });
        self.ended_latched = false;
        self.last_video_position = None;
        self.settle_until = Some(now + self.config.settle_window.value);

        let mut commands = vec![ViewCommand::LoadSegment {
            segment: segment_id,
            index: index as u32,
        }];
        // A segment without GPS points still plays; only map centering is skipped
        if let Some(point) = first_point {
            commands.push(ViewCommand::CenterMap {
                position: point.position(),
            });
            commands.push(self.show_distance(point.total_distance));
        }
        commands
    }

    /// Move the cursor onto a pooled point chosen by a click or search.
    fn jump_to_point(&mut self, point: &PooledPoint, now: Instant) -> Vec<ViewCommand> {
        let Some(cursor) = self.cursor else {
            return Vec::new();
        };

        let segment_changed =
            cursor.segment != point.segment || cursor.segment_index != point.segment_index;
        let seconds = f64::from(point.second);

        self.cursor = Some(PlaybackCursor {
            segment: point.segment,
            segment_index: point.segment_index,
            seconds,
        });
        self.ended_latched = false;

        let mut commands = Vec::new();
        let mut video_disturbed = false;

        if segment_changed {
            self.last_video_position = None;
            commands.push(ViewCommand::LoadSegment {
                segment: point.segment,
                index: point.segment_index,
            });
            commands.push(ViewCommand::SeekVideo { seconds });
            video_disturbed = true;
        } else {
            let needs_seek = match self.last_video_position {
                Some(current) => {
                    (current - seconds).abs() > self.config.seek_dead_band.value
                }
                None => true,
            };
            if needs_seek {
                commands.push(ViewCommand::SeekVideo { seconds });
                video_disturbed = true;
            }
        }

        if video_disturbed {
            self.settle_until = Some(now + self.config.settle_window.value);
        }

        commands.push(ViewCommand::CenterMap {
            position: point.position,
        });
        commands.push(self.show_distance(point.total_distance));
        commands
    }

    fn show_distance(&self, total_distance: f64) -> ViewCommand {
        let meters = self.route_offset_m + total_distance;
        ViewCommand::ShowDistance {
            meters,
            formatted: format_distance(meters),
        }
    }
}

/// The point whose `second` index is closest to `seconds`.
///
/// First point wins ties, so the map cursor is deterministic.
fn nearest_by_second(points: &[TrackPoint], seconds: f64) -> Option<&TrackPoint> {
    let mut best: Option<(&TrackPoint, f64)> = None;

    for point in points {
        let delta = (f64::from(point.second) - seconds).abs();
        match best {
            Some((_, best_delta)) if delta >= best_delta => {}
            _ => best = Some((point, delta)),
        }
    }

    best.map(|(point, _)| point)
}

/// The reference location whose absolute route distance is closest to the
/// target, by absolute difference. First location wins ties.
fn nearest_reference(
    references: &[ReferenceLocation],
    target_meters: f64,
) -> Option<&ReferenceLocation> {
    let mut best: Option<(&ReferenceLocation, f64)> = None;

    for reference in references {
        let diff = (reference.meter.unwrap_or(0.0) - target_meters).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((reference, diff)),
        }
    }

    best.map(|(reference, _)| reference)
}
