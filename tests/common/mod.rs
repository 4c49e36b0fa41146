//! Shared fixtures for mr-tracker tests

#![allow(dead_code)]

mod mock_services;

pub use mock_services::{MockBuildStatusSource, MockMergeRequestSource, MockNotifier};

use chrono::{Duration, Utc};
use mr_tracker::types::{BuildStatus, EnrichedMergeRequest, MergeRequest};

/// A mergeable merge request opened two hours ago
pub fn make_mr(iid: u64, branch: &str) -> MergeRequest {
    MergeRequest {
        id: 1000 + iid,
        iid,
        title: format!("Add feature {iid}"),
        web_url: format!("https://gitlab.example.com/team/app/-/merge_requests/{iid}"),
        author: "Alex Doe".to_string(),
        created_at: Utc::now() - Duration::hours(2),
        source_branch: branch.to_string(),
        target_branch: "main".to_string(),
        mergeable: true,
    }
}

/// Pair a merge request with a build status
pub fn enriched(merge_request: MergeRequest, build_status: BuildStatus) -> EnrichedMergeRequest {
    EnrichedMergeRequest {
        merge_request,
        build_status,
    }
}

/// JSON body for one GitLab API merge request
pub fn gitlab_mr_json(iid: u64, branch: &str, merge_status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 1000 + iid,
        "iid": iid,
        "project_id": 42,
        "title": format!("Add feature {iid}"),
        "description": "",
        "state": "opened",
        "created_at": "2026-08-06T09:30:00Z",
        "updated_at": "2026-08-06T10:00:00Z",
        "source_branch": branch,
        "target_branch": "main",
        "author": { "id": 7, "name": "Alex Doe", "username": "adoe" },
        "work_in_progress": false,
        "merge_status": merge_status,
        "web_url": format!("https://gitlab.example.com/team/app/-/merge_requests/{iid}"),
    })
}
