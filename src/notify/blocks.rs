//! Block Kit message rendering
//!
//! Builds the structured summary message: a header with the open count,
//! then one linked title, one created/author field pair, and a divider per
//! merge request.

use crate::types::{BuildStatus, EnrichedMergeRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

const ONE_MINUTE_MS: i64 = 60_000;
const ONE_HOUR_MS: i64 = 3_600_000;
const ONE_DAY_MS: i64 = 86_400_000;

/// A `mrkdwn` text object
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MrkdwnText {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Markdown body
    pub text: String,
}

impl MrkdwnText {
    fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn",
            text: text.into(),
        }
    }
}

/// One Block Kit layout block
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A section with either a single text body or a field pair
    Section {
        /// Markdown body (absent on field sections)
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<MrkdwnText>,
        /// Side-by-side fields (absent on text sections)
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<MrkdwnText>>,
    },
    /// A horizontal rule between entries
    Divider,
}

impl Block {
    /// A section block with a single markdown body
    pub fn section(text: impl Into<String>) -> Self {
        Self::Section {
            text: Some(MrkdwnText::new(text)),
            fields: None,
        }
    }

    /// A section block with side-by-side markdown fields
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Section {
            text: None,
            fields: Some(fields.into_iter().map(MrkdwnText::new).collect()),
        }
    }
}

/// Human-friendly relative age of a timestamp.
///
/// Bucketed by elapsed milliseconds: under a minute, whole minutes under an
/// hour, whole hours under a day, then whole days. The bucket boundaries
/// are exact (59 999 ms is "less than one minute ago", 60 000 ms is
/// "1 minute ago").
pub fn pretty_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - created_at).num_milliseconds();

    if elapsed_ms < ONE_MINUTE_MS {
        return "less than one minute ago".to_string();
    }
    let (count, unit) = if elapsed_ms < ONE_HOUR_MS {
        (elapsed_ms / ONE_MINUTE_MS, "minute")
    } else if elapsed_ms < ONE_DAY_MS {
        (elapsed_ms / ONE_HOUR_MS, "hour")
    } else {
        (elapsed_ms / ONE_DAY_MS, "day")
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

fn header(greeting: Option<&str>, count: usize) -> String {
    let summary = format!("There are currently *{count}* open merge requests.");
    match greeting {
        Some(greeting) => format!("{greeting} {summary}"),
        None => summary,
    }
}

fn entry_text(enriched: &EnrichedMergeRequest) -> String {
    let mr = &enriched.merge_request;
    let mut text = format!("<{}|{}>", mr.web_url, mr.title);
    if enriched.build_status == BuildStatus::Failed {
        text.push_str(" :thisisfine: Failing Build :thisisfine:");
    }
    if !mr.mergeable {
        text.push_str(" :mergemonkey: Merge Conflicts :mergemonkey:");
    }
    text
}

/// Render the full update message.
///
/// The header and its divider are always present; each merge request adds
/// a linked-title section, a created/author field pair, and a divider.
pub fn build_message(
    greeting: Option<&str>,
    merge_requests: &[EnrichedMergeRequest],
    now: DateTime<Utc>,
) -> Vec<Block> {
    let mut blocks = vec![
        Block::section(header(greeting, merge_requests.len())),
        Block::Divider,
    ];

    for enriched in merge_requests {
        let mr = &enriched.merge_request;
        blocks.push(Block::section(entry_text(enriched)));
        blocks.push(Block::fields([
            format!("*Created:* {}", pretty_age(mr.created_at, now)),
            format!("*Author:* {}", mr.author),
        ]));
        blocks.push(Block::Divider);
    }

    blocks
}
