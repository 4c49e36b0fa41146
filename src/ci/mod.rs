//! Build-status enrichment
//!
//! Pairs each fetched merge request with the CI status of its source
//! branch. Lookups run concurrently and fail independently; a failed
//! lookup degrades that one item to [`BuildStatus::Unknown`].

mod jenkins;

pub use jenkins::{JenkinsClient, color_to_status};

use crate::error::Result;
use crate::types::{BuildStatus, EnrichedMergeRequest, MergeRequest};
use async_trait::async_trait;
use futures::future::join_all;
use tracing::warn;

/// Per-branch CI status lookup
#[async_trait]
pub trait BuildStatusSource: Send + Sync {
    /// Look up the most recent build status for a branch
    async fn build_status(&self, branch: &str) -> Result<BuildStatus>;
}

/// Attach a build status to every merge request.
///
/// The returned list has exactly the same length and order as the input.
/// A lookup error is logged and maps to [`BuildStatus::Unknown`] for that
/// item only; it never aborts the batch.
pub async fn enrich_with_build_status<C: BuildStatusSource>(
    ci: &C,
    merge_requests: Vec<MergeRequest>,
) -> Vec<EnrichedMergeRequest> {
    let lookups = merge_requests.into_iter().map(|merge_request| async move {
        let build_status = match ci.build_status(&merge_request.source_branch).await {
            Ok(status) => status,
            Err(e) => {
                warn!(
                    branch = %merge_request.source_branch,
                    error = %e,
                    "failed to retrieve build status for branch"
                );
                BuildStatus::Unknown
            }
        };
        EnrichedMergeRequest {
            merge_request,
            build_status,
        }
    });

    join_all(lookups).await
}
