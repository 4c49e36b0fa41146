//! Pipeline orchestration
//!
//! One tick = fetch open merge requests, enrich each with its build
//! status, send the rendered summary. A fetch failure aborts the tick and
//! propagates to the scheduler's error handler; enrichment and sending
//! degrade internally and never raise.

use crate::ci::{BuildStatusSource, enrich_with_build_status};
use crate::error::Result;
use crate::notify::Notifier;
use crate::source::MergeRequestSource;

/// Wires the source, enricher, and notifier into one runnable pipeline
pub struct Tracker<S, C, N> {
    source: S,
    ci: C,
    notifier: N,
}

impl<S, C, N> Tracker<S, C, N>
where
    S: MergeRequestSource,
    C: BuildStatusSource,
    N: Notifier,
{
    /// Create a tracker over the three services
    pub const fn new(source: S, ci: C, notifier: N) -> Self {
        Self {
            source,
            ci,
            notifier,
        }
    }

    /// Run one pipeline tick to completion.
    pub async fn run_once(&self) -> Result<()> {
        let merge_requests = self.source.open_merge_requests().await?;
        let enriched = enrich_with_build_status(&self.ci, merge_requests).await;
        self.notifier.send_update(&enriched).await;
        Ok(())
    }
}
