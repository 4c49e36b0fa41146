//! Cron-driven trigger with a weekend-skip policy
//!
//! The scheduler fires an async callback on each cron occurrence, in host
//! local time. Occurrences landing on a weekend are suppressed (the
//! schedule itself is untouched) unless the weekend override is on. A
//! callback failure is caught and logged; it never stops the scheduler.

mod cron;

pub use cron::CronExpr;

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Local, TimeZone, Weekday};
use std::future::Future;
use tracing::{debug, error, info};

/// Whether a day falls on the weekend
pub const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Skip policy: fire unless the occurrence lands on a weekend and the
/// override is off
pub fn should_fire<Tz: TimeZone>(at: &DateTime<Tz>, run_weekends: bool) -> bool {
    run_weekends || !is_weekend(at.weekday())
}

/// Fires a callback on a cron schedule, skipping weekends unless overridden
pub struct CronScheduler {
    schedule: String,
    expr: CronExpr,
    run_weekends: bool,
}

impl CronScheduler {
    /// Create a scheduler from a cron expression.
    pub fn new(schedule: &str, run_weekends: bool) -> Result<Self> {
        Ok(Self {
            schedule: schedule.to_string(),
            expr: CronExpr::parse(schedule)?,
            run_weekends,
        })
    }

    /// Next scheduled fire time strictly after `after`.
    ///
    /// Weekend occurrences are included here; the skip policy suppresses
    /// the callback, not the occurrence.
    pub fn next_fire(&self, after: DateTime<Local>) -> Option<DateTime<Local>> {
        self.expr.next_after(after)
    }

    /// Run the schedule forever.
    ///
    /// Each tick awaits the callback to completion before the next sleep
    /// is computed, so a slow run delays rather than overlaps the next
    /// tick. Errors only if the expression stops producing occurrences.
    pub async fn run<F, Fut>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let mut after = Local::now();
        loop {
            let next = self.next_fire(after).ok_or_else(|| {
                Error::Schedule(format!("'{}' has no upcoming occurrence", self.schedule))
            })?;
            info!(next = %next, "next trigger scheduled");

            let wait = (next - Local::now())
                .to_std()
                .unwrap_or(std::time::Duration::ZERO);
            tokio::time::sleep(wait).await;

            debug!(schedule = %self.schedule, "cron job triggered");
            if should_fire(&next, self.run_weekends) {
                info!("triggering job");
                match callback().await {
                    Ok(()) => info!("job completed successfully"),
                    Err(e) => error!(error = %e, "timer callback failed"),
                }
            } else {
                info!("skipping job (weekend rule)");
            }

            // Strictly-after `next` so one occurrence fires at most once,
            // while occurrences missed during a slow callback stay missed.
            after = Local::now().max(next);
        }
    }
}
