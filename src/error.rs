//! Error types for mr-tracker

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while tracking merge requests
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required configuration is missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// Cron expression could not be parsed or produces no occurrences
    #[error("invalid cron schedule: {0}")]
    Schedule(String),

    /// GitLab API returned an error or an unexpected response
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Jenkins API returned an error or an unexpected response
    #[error("Jenkins API error: {0}")]
    JenkinsApi(String),

    /// Slack API returned an error or an unexpected response
    #[error("Slack API error: {0}")]
    SlackApi(String),

    /// Underlying HTTP transport failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
