//! GitLab merge-request source implementation

use crate::error::{Error, Result};
use crate::source::MergeRequestSource;
use crate::types::MergeRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitLab API client using reqwest
pub struct GitLabClient {
    client: Client,
    token: String,
    base_url: String,
    project: String,
}

#[derive(Deserialize)]
struct ApiMergeRequest {
    id: u64,
    iid: u64,
    title: String,
    web_url: String,
    created_at: DateTime<Utc>,
    source_branch: String,
    target_branch: String,
    author: ApiAuthor,
    // "can_be_merged", "cannot_be_merged", "unchecked", "checking"
    merge_status: String,
}

#[derive(Deserialize)]
struct ApiAuthor {
    name: String,
}

impl From<ApiMergeRequest> for MergeRequest {
    fn from(mr: ApiMergeRequest) -> Self {
        Self {
            id: mr.id,
            iid: mr.iid,
            title: mr.title,
            web_url: mr.web_url,
            author: mr.author.name,
            created_at: mr.created_at,
            source_branch: mr.source_branch,
            target_branch: mr.target_branch,
            mergeable: mr.merge_status == "can_be_merged",
        }
    }
}

impl GitLabClient {
    /// Create a new GitLab client for one project.
    ///
    /// `base_url` includes the scheme (e.g. `https://gitlab.example.com`);
    /// `project` is a numeric ID or a `group/project` path.
    pub fn new(base_url: &str, token: String, project: String) -> Result<Self> {
        url::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid GitLab base URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            project,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.base_url, path)
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project).into_owned()
    }
}

#[async_trait]
impl MergeRequestSource for GitLabClient {
    async fn open_merge_requests(&self) -> Result<Vec<MergeRequest>> {
        debug!(project = %self.project, "retrieving merge requests");
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests",
            self.encoded_project()
        ));

        let mrs: Vec<ApiMergeRequest> = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .query(&[
                ("state", "opened"),
                ("wip", "no"),
                ("with_merge_status_recheck", "true"),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        info!(
            count = mrs.len(),
            project = %self.project,
            "merge requests retrieved from GitLab"
        );
        Ok(mrs.into_iter().map(Into::into).collect())
    }
}
