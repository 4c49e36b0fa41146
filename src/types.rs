//! Core types for mr-tracker

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open merge request, produced fresh on every fetch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequest {
    /// Globally unique merge request ID
    pub id: u64,
    /// Per-project merge request number (what GitLab shows as `!N`)
    pub iid: u64,
    /// Merge request title
    pub title: String,
    /// Web URL for the merge request
    pub web_url: String,
    /// Author display name
    pub author: String,
    /// When the merge request was opened
    pub created_at: DateTime<Utc>,
    /// Source branch name
    pub source_branch: String,
    /// Target branch name
    pub target_branch: String,
    /// Whether GitLab reports the merge request as conflict-free
    pub mergeable: bool,
}

/// Most recent CI result for a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildStatus {
    /// Last build failed
    Failed,
    /// Last build passed with test failures or instability
    Unstable,
    /// Last build passed
    Successful,
    /// No build found, or the lookup failed
    Unknown,
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed => write!(f, "failed"),
            Self::Unstable => write!(f, "unstable"),
            Self::Successful => write!(f, "successful"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A merge request paired with the build status of its source branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedMergeRequest {
    /// The merge request as fetched
    pub merge_request: MergeRequest,
    /// Build status of the source branch
    pub build_status: BuildStatus,
}
