//! Routeplay Sync - Playback synchronization coordinator
//!
//! Given the ingested point sequences of an ordered video-segment
//! collection, a [`Coordinator`] owns the single playback cursor and
//! recomputes it from video time ticks, end-of-segment signals, map and
//! marker clicks, distance searches, and manual navigation. Every handled
//! event yields the view commands that bring the video player, the map,
//! and the distance indicator in line with the new cursor.

pub mod config;
pub mod coordinator;
pub mod dispatch;
pub mod events;
pub mod media;
pub mod pool;

pub use config::SyncConfig;
pub use coordinator::Coordinator;
pub use dispatch::{CommandBus, CommandSink};
pub use events::{DistanceQuery, SyncEvent, ViewCommand};
pub use media::{MediaResolver, ResolvedMedia};
pub use pool::{PointPool, PooledPoint};
