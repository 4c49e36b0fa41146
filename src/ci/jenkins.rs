//! Jenkins build-status lookup

use crate::ci::BuildStatusSource;
use crate::error::{Error, Result};
use crate::types::BuildStatus;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Jenkins API client, scoped to one job folder
///
/// The configured base URL is the job path the per-branch jobs live under;
/// the branch name is appended to it, so a multibranch pipeline base looks
/// like `https://jenkins.example.com/job/my-project/job/`.
pub struct JenkinsClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ApiJob {
    // Jenkins ball color, e.g. "red", "blue", "yellow", "disabled"
    color: Option<String>,
}

/// Map a Jenkins ball color to a build status.
///
/// Anything outside the fixed table (including animated variants and
/// absent colors) is [`BuildStatus::Unknown`].
pub fn color_to_status(color: Option<&str>) -> BuildStatus {
    match color {
        Some("red") => BuildStatus::Failed,
        Some("yellow") => BuildStatus::Unstable,
        Some("blue") => BuildStatus::Successful,
        _ => BuildStatus::Unknown,
    }
}

impl JenkinsClient {
    /// Create a new Jenkins client
    pub fn new(base_url: &str) -> Result<Self> {
        url::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid Jenkins base URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::JenkinsApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn job_url(&self, branch: &str) -> String {
        format!("{}{}/api/json", self.base_url, urlencoding::encode(branch))
    }
}

#[async_trait]
impl BuildStatusSource for JenkinsClient {
    async fn build_status(&self, branch: &str) -> Result<BuildStatus> {
        let job: ApiJob = self
            .client
            .get(self.job_url(branch))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::JenkinsApi(e.to_string()))?
            .json()
            .await?;

        debug!(branch, color = ?job.color, "retrieved build status for branch");
        Ok(color_to_status(job.color.as_deref()))
    }
}
