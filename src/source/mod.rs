//! Merge-request sources
//!
//! Provides the trait the pipeline fetches open merge requests through,
//! and the GitLab implementation.

mod gitlab;

pub use gitlab::GitLabClient;

use crate::error::Result;
use crate::types::MergeRequest;
use async_trait::async_trait;

/// Source of open merge requests for one configured project
///
/// A fetch failure (network, authentication) must propagate as an error;
/// it aborts the current pipeline run and the next scheduled tick is the
/// retry mechanism.
#[async_trait]
pub trait MergeRequestSource: Send + Sync {
    /// Fetch the currently open, not-work-in-progress merge requests,
    /// in the order the remote returns them
    async fn open_merge_requests(&self) -> Result<Vec<MergeRequest>>;
}
