//! Mock pipeline services for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development. State lives behind `Arc` so a
//! test can keep a handle for verification after moving a clone into the
//! tracker.

#![allow(dead_code)]

use async_trait::async_trait;
use mr_tracker::ci::BuildStatusSource;
use mr_tracker::error::{Error, Result};
use mr_tracker::notify::Notifier;
use mr_tracker::source::MergeRequestSource;
use mr_tracker::types::{BuildStatus, EnrichedMergeRequest, MergeRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Simple mock merge-request source
///
/// Features:
/// - Configurable fetch response
/// - Call counting for verification
/// - Error injection for failure path testing
#[derive(Clone, Default)]
pub struct MockMergeRequestSource {
    response: Arc<Mutex<Vec<MergeRequest>>>,
    fetch_calls: Arc<Mutex<usize>>,
    error_on_fetch: Arc<Mutex<Option<String>>>,
}

impl MockMergeRequestSource {
    /// Create a mock that returns the given merge requests
    pub fn with_merge_requests(merge_requests: Vec<MergeRequest>) -> Self {
        Self {
            response: Arc::new(Mutex::new(merge_requests)),
            ..Self::default()
        }
    }

    /// Make `open_merge_requests` return an error
    pub fn fail_fetch(&self, msg: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(msg.to_string());
    }

    /// Number of times `open_merge_requests` was called
    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }
}

#[async_trait]
impl MergeRequestSource for MockMergeRequestSource {
    async fn open_merge_requests(&self) -> Result<Vec<MergeRequest>> {
        *self.fetch_calls.lock().unwrap() += 1;

        if let Some(msg) = self.error_on_fetch.lock().unwrap().as_ref() {
            return Err(Error::GitLabApi(msg.clone()));
        }

        Ok(self.response.lock().unwrap().clone())
    }
}

/// Simple mock build-status source
///
/// Features:
/// - Configurable status per branch (default `Unknown`)
/// - Lookup tracking for verification
/// - Per-branch error injection for failure isolation testing
#[derive(Clone, Default)]
pub struct MockBuildStatusSource {
    statuses: Arc<Mutex<HashMap<String, BuildStatus>>>,
    lookup_calls: Arc<Mutex<Vec<String>>>,
    failing_branches: Arc<Mutex<Vec<String>>>,
}

impl MockBuildStatusSource {
    /// Create a mock with no configured statuses
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status returned for a branch
    pub fn set_status(&self, branch: &str, status: BuildStatus) {
        self.statuses
            .lock()
            .unwrap()
            .insert(branch.to_string(), status);
    }

    /// Make lookups for a branch return an error
    pub fn fail_branch(&self, branch: &str) {
        self.failing_branches
            .lock()
            .unwrap()
            .push(branch.to_string());
    }

    /// Get all branches `build_status` was called with
    pub fn get_lookup_calls(&self) -> Vec<String> {
        self.lookup_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BuildStatusSource for MockBuildStatusSource {
    async fn build_status(&self, branch: &str) -> Result<BuildStatus> {
        self.lookup_calls.lock().unwrap().push(branch.to_string());

        if self
            .failing_branches
            .lock()
            .unwrap()
            .iter()
            .any(|b| b == branch)
        {
            return Err(Error::JenkinsApi(format!("lookup failed for {branch}")));
        }

        Ok(self
            .statuses
            .lock()
            .unwrap()
            .get(branch)
            .copied()
            .unwrap_or(BuildStatus::Unknown))
    }
}

/// Mock notifier that records every update it is asked to send
#[derive(Clone, Default)]
pub struct MockNotifier {
    updates: Arc<Mutex<Vec<Vec<EnrichedMergeRequest>>>>,
}

impl MockNotifier {
    /// Create a mock notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates sent so far, oldest first
    pub fn get_updates(&self) -> Vec<Vec<EnrichedMergeRequest>> {
        self.updates.lock().unwrap().clone()
    }

    /// Number of updates sent
    pub fn sent_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_update(&self, merge_requests: &[EnrichedMergeRequest]) {
        self.updates.lock().unwrap().push(merge_requests.to_vec());
    }
}
