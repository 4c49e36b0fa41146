//! mr-tracker binary entry point
//!
//! Startup order matters: configuration and the Slack self-test must both
//! succeed before the scheduler starts; any failure aborts the process.

use anyhow::Result;
use clap::Parser;
use mr_tracker::ci::JenkinsClient;
use mr_tracker::config::Config;
use mr_tracker::notify::SlackMessenger;
use mr_tracker::scheduler::CronScheduler;
use mr_tracker::source::GitLabClient;
use mr_tracker::tracker::Tracker;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mr-tracker",
    version,
    about = "Posts a scheduled Slack digest of open GitLab merge requests"
)]
struct Cli {
    /// Run a single update immediately and exit
    #[arg(long)]
    once: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "mr_tracker=debug"
    } else {
        "mr_tracker=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    info!("bootstrapping application");
    let config = Config::from_env()?;

    let slack = SlackMessenger::new(
        config.slack_token.clone(),
        config.slack_channel.clone(),
        config.greeting.clone(),
        config.quiet,
    )?;
    slack.connect().await?;

    let gitlab = GitLabClient::new(
        &config.gitlab_host,
        config.gitlab_token.clone(),
        config.gitlab_project.clone(),
    )?;
    let jenkins = JenkinsClient::new(&config.jenkins_host)?;
    let tracker = Tracker::new(gitlab, jenkins, slack);

    if cli.once {
        tracker.run_once().await?;
        return Ok(());
    }

    let scheduler = CronScheduler::new(&config.cron_schedule, config.run_weekends)?;
    if let Some(next) = scheduler.next_fire(chrono::Local::now()) {
        info!(schedule = %config.cron_schedule, next = %next, "scheduler initialised");
    }
    scheduler.run(|| tracker.run_once()).await?;
    Ok(())
}
