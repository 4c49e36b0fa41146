//! 5-field cron expression parsing
//!
//! Supports `MIN HOUR DOM MON DOW` with `*`, `*/step`, single values,
//! ranges (`a-b`), and comma lists. Day-of-week accepts 0-7, with both 0
//! and 7 meaning Sunday. Standard union semantics apply when both
//! day-of-month and day-of-week are restricted: a day matches if either
//! field matches.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

/// Scan horizon for the next occurrence (one leap year of minutes)
const MAX_SCAN_MINUTES: u32 = 366 * 24 * 60;

/// A parsed cron expression
#[derive(Debug, Clone)]
pub struct CronExpr {
    minutes: Vec<u32>,
    hours: Vec<u32>,
    days_of_month: Vec<u32>,
    months: Vec<u32>,
    /// 0 = Sunday .. 6 = Saturday
    days_of_week: Vec<u32>,
    dom_restricted: bool,
    dow_restricted: bool,
}

impl CronExpr {
    /// Parse a 5-field cron expression.
    pub fn parse(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(Error::Schedule(format!(
                "'{expression}' (need 5 fields: MIN HOUR DOM MON DOW)"
            )));
        }

        let (minutes, _) = parse_field(parts[0], 0, 59)?;
        let (hours, _) = parse_field(parts[1], 0, 23)?;
        let (days_of_month, dom_restricted) = parse_field(parts[2], 1, 31)?;
        let (months, _) = parse_field(parts[3], 1, 12)?;
        let (raw_dow, dow_restricted) = parse_field(parts[4], 0, 7)?;

        // 7 is an alias for Sunday
        let mut days_of_week: Vec<u32> =
            raw_dow.into_iter().map(|d| if d == 7 { 0 } else { d }).collect();
        days_of_week.sort_unstable();
        days_of_week.dedup();

        Ok(Self {
            minutes,
            hours,
            days_of_month,
            months,
            days_of_week,
            dom_restricted,
            dow_restricted,
        })
    }

    /// Compute the next matching instant strictly after `after`, at minute
    /// resolution. Returns `None` if nothing matches within a year.
    pub fn next_after<Tz: TimeZone>(&self, after: DateTime<Tz>) -> Option<DateTime<Tz>> {
        let mut candidate = after.with_second(0)?.with_nanosecond(0)? + Duration::minutes(1);

        for _ in 0..MAX_SCAN_MINUTES {
            if self.matches(&candidate) {
                return Some(candidate);
            }
            candidate += Duration::minutes(1);
        }
        None
    }

    fn matches<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        self.minutes.contains(&t.minute())
            && self.hours.contains(&t.hour())
            && self.months.contains(&t.month())
            && self.day_matches(t)
    }

    fn day_matches<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        let dom = self.days_of_month.contains(&t.day());
        let dow = self
            .days_of_week
            .contains(&t.weekday().num_days_from_sunday());
        match (self.dom_restricted, self.dow_restricted) {
            (false, false) => true,
            (true, false) => dom,
            (false, true) => dow,
            (true, true) => dom || dow,
        }
    }
}

/// Parse one cron field into its matching values.
///
/// The returned flag is `false` for a bare `*` (unrestricted), which feeds
/// the day-of-month/day-of-week union rule.
fn parse_field(field: &str, min: u32, max: u32) -> Result<(Vec<u32>, bool)> {
    if field == "*" {
        return Ok(((min..=max).collect(), false));
    }

    let mut values = Vec::new();
    for part in field.split(',') {
        values.extend(parse_part(part, min, max)?);
    }
    values.sort_unstable();
    values.dedup();
    Ok((values, true))
}

fn parse_part(part: &str, min: u32, max: u32) -> Result<Vec<u32>> {
    let invalid = || Error::Schedule(format!("invalid field value '{part}'"));

    if part == "*" {
        return Ok((min..=max).collect());
    }

    if let Some(step) = part.strip_prefix("*/") {
        let step: u32 = step.parse().map_err(|_| invalid())?;
        if step == 0 {
            return Err(invalid());
        }
        return Ok((min..=max).step_by(step as usize).collect());
    }

    if let Some((lo, hi)) = part.split_once('-') {
        let lo: u32 = lo.parse().map_err(|_| invalid())?;
        let hi: u32 = hi.parse().map_err(|_| invalid())?;
        if lo > hi || lo < min || hi > max {
            return Err(invalid());
        }
        return Ok((lo..=hi).collect());
    }

    let value: u32 = part.parse().map_err(|_| invalid())?;
    if value < min || value > max {
        return Err(invalid());
    }
    Ok(vec![value])
}
