//! Slack Web API messenger

use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::notify::blocks::build_message;
use crate::types::EnrichedMergeRequest;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_API_URL: &str = "https://slack.com/api";

const PROBE_MESSAGE: &str = "_Ignore me, this is just to check I can talk to the channel!_";

/// Slack messenger posting to one fixed channel
pub struct SlackMessenger {
    client: Client,
    token: String,
    channel: String,
    greeting: Option<String>,
    quiet: bool,
    api_url: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    team: Option<String>,
    team_id: Option<String>,
}

impl SlackMessenger {
    /// Create a messenger against the public Slack API
    pub fn new(token: String, channel: String, greeting: Option<String>, quiet: bool) -> Result<Self> {
        Self::with_api_url(DEFAULT_API_URL, token, channel, greeting, quiet)
    }

    /// Create a messenger against a custom API base URL
    pub fn with_api_url(
        api_url: &str,
        token: String,
        channel: String,
        greeting: Option<String>,
        quiet: bool,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::SlackApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            channel,
            greeting,
            quiet,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Verify the credential and channel before scheduling starts.
    ///
    /// Calls `auth.test`, then (outside quiet mode) posts a harmless probe
    /// message to the destination channel. Any failure here is fatal to
    /// startup.
    pub async fn connect(&self) -> Result<()> {
        debug!("authenticating with Slack API");
        let auth = self.call("auth.test", &json!({})).await?;
        info!(
            team = auth.team.as_deref().unwrap_or("unknown"),
            team_id = auth.team_id.as_deref().unwrap_or("unknown"),
            "successfully authenticated with Slack API"
        );

        if self.quiet {
            debug!(channel = %self.channel, "skipping channel ping test");
            return Ok(());
        }

        self.post_message(&json!({
            "channel": self.channel,
            "text": PROBE_MESSAGE,
        }))
        .await?;
        info!(channel = %self.channel, "successfully pinged Slack channel");
        Ok(())
    }

    async fn call(&self, method: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        let response: ApiResponse = self
            .client
            .post(format!("{}/{method}", self.api_url))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::SlackApi(e.to_string()))?
            .json()
            .await?;

        if response.ok {
            Ok(response)
        } else {
            Err(Error::SlackApi(
                response.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }

    async fn post_message(&self, payload: &serde_json::Value) -> Result<()> {
        self.call("chat.postMessage", payload).await.map(|_| ())
    }
}

#[async_trait]
impl Notifier for SlackMessenger {
    async fn send_update(&self, merge_requests: &[EnrichedMergeRequest]) {
        debug!(channel = %self.channel, "sending update to Slack channel");
        let blocks = build_message(self.greeting.as_deref(), merge_requests, Utc::now());
        let payload = json!({
            "channel": self.channel,
            "blocks": blocks,
            "text": "",
        });

        match self.post_message(&payload).await {
            Ok(()) => info!(channel = %self.channel, "update sent to Slack channel"),
            Err(e) => error!(
                channel = %self.channel,
                error = %e,
                "failed to send update to Slack channel"
            ),
        }
    }
}
