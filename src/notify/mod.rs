//! Update notification
//!
//! Provides the trait the pipeline posts summaries through, the Block Kit
//! rendering, and the Slack implementation.

pub mod blocks;
mod slack;

pub use slack::SlackMessenger;

use crate::types::EnrichedMergeRequest;
use async_trait::async_trait;

/// Destination for the rendered merge-request summary
///
/// Sending is infallible from the caller's perspective: a transmission
/// failure is logged and dropped, and the next scheduled tick re-sends
/// current state.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Render and transmit the summary for one pipeline run
    async fn send_update(&self, merge_requests: &[EnrichedMergeRequest]);
}
