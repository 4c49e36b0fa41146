//! mr-tracker — a scheduled Slack digest of open GitLab merge requests
//!
//! On each cron occurrence (weekends skipped unless overridden) the
//! pipeline fetches the open, not-WIP merge requests for one GitLab
//! project, looks up the Jenkins build status of each source branch in
//! parallel, and posts a Block Kit summary to a fixed Slack channel.
//! Every run is stateless; the schedule itself is the retry mechanism.

pub mod ci;
pub mod config;
pub mod error;
pub mod notify;
pub mod scheduler;
pub mod source;
pub mod tracker;
pub mod types;
