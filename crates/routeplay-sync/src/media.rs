//! Playable-source resolution bookkeeping.
//!
//! Resolving a segment's playable URL is asynchronous in the hosting
//! application. Only one resolution may be outstanding at a time;
//! switching segments supersedes it. A completed resolution is accepted
//! or discarded by comparing identities, never by arrival order, so a
//! slow response for a segment that is no longer active can never clobber
//! the current one.

use routeplay_core::models::SegmentId;

/// The request currently allowed to complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    pub segment: SegmentId,
    pub source_key: String,
}

/// A resolution accepted as current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    pub segment: SegmentId,
    pub source_key: String,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct MediaResolver {
    pending: Option<MediaRequest>,
}

impl MediaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin resolving a segment's source, superseding any outstanding
    /// request.
    pub fn begin(&mut self, segment: SegmentId, source_key: impl Into<String>) {
        self.pending = Some(MediaRequest {
            segment,
            source_key: source_key.into(),
        });
    }

    /// Offer a completed resolution.
    ///
    /// Returns `None` when the response does not match the outstanding
    /// request (stale), leaving state unchanged. A match consumes the
    /// request.
    pub fn accept(
        &mut self,
        segment: SegmentId,
        source_key: &str,
        url: impl Into<String>,
    ) -> Option<ResolvedMedia> {
        match self.pending.take() {
            Some(request) if request.segment == segment && request.source_key == source_key => {
                Some(ResolvedMedia {
                    segment: request.segment,
                    source_key: request.source_key,
                    url: url.into(),
                })
            }
            outstanding => {
                self.pending = outstanding;
                tracing::debug!(
                    segment = segment.0,
                    source_key,
                    "discarding stale media resolution"
                );
                None
            }
        }
    }

    pub fn pending(&self) -> Option<&MediaRequest> {
        self.pending.as_ref()
    }
}
