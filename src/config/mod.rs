//! Startup configuration
//!
//! All settings come from the process environment (a `.env` file is loaded
//! by the binary before this runs). The environment is read exactly once,
//! here; every component receives its settings through constructors.

use crate::error::{Error, Result};

/// Resolved configuration for one process lifetime
#[derive(Debug, Clone)]
pub struct Config {
    /// 5-field cron expression driving the update schedule
    pub cron_schedule: String,
    /// Run on Saturdays and Sundays too (`ENABLE_WEEKENDS=1`)
    pub run_weekends: bool,
    /// GitLab base URL, including scheme
    pub gitlab_host: String,
    /// GitLab personal access token
    pub gitlab_token: String,
    /// Numeric project ID or `group/project` path
    pub gitlab_project: String,
    /// Jenkins job base URL; the branch name is appended to it
    pub jenkins_host: String,
    /// Slack bot OAuth token
    pub slack_token: String,
    /// Destination Slack channel ID
    pub slack_channel: String,
    /// Optional greeting prefixed to the summary header
    pub greeting: Option<String>,
    /// Skip the startup channel probe (`QUIET_MODE=1`)
    pub quiet: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Returns [`Error::Config`] naming the first missing required variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            cron_schedule: required("CRON_JOB_SCHEDULE")?,
            run_weekends: flag("ENABLE_WEEKENDS"),
            gitlab_host: required("GITLAB_HOST")?,
            gitlab_token: required("GIT_ACCESS_TOKEN")?,
            gitlab_project: required("GITLAB_PROJECT_ID")?,
            jenkins_host: required("JENKINS_HOST")?,
            slack_token: required("SLACK_BOT_OAUTH_TOKEN")?,
            slack_channel: required("SLACK_CHANNEL_ID")?,
            greeting: optional("SLACK_GREETING"),
            quiet: flag("QUIET_MODE"),
        })
    }
}

fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| Error::Config(format!("{name} environment variable not set")))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// A flag variable is on iff it is set to exactly `"1"`.
fn flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "1")
}
