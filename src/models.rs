//! Core data types for the search pipeline.
//!
//! [`ClipboardRecord`] is the raw row read from the store; [`ResultItem`]
//! is the launcher-facing view derived from it. The timestamp on a result
//! item orders the output and is never serialized.

use serde::Serialize;

use crate::format;

/// Maximum number of characters shown in a result title.
pub const TITLE_MAX_CHARS: usize = 120;

/// One row of the store's `clipboard` table. Read-only.
#[derive(Debug, Clone)]
pub struct ClipboardRecord {
    pub content: String,
    /// Seconds relative to the store's reference epoch.
    pub timestamp: i64,
    pub source_app_name: Option<String>,
    pub source_app_path: Option<String>,
}

/// Icon reference the launcher resolves from a file path.
#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl Icon {
    /// Icon taken from the copying application's bundle path.
    pub fn fileicon(path: String) -> Self {
        Self {
            path,
            kind: "fileicon",
        }
    }
}

/// A single search hit, shaped for the launcher's Script Filter.
#[derive(Debug, Clone, Serialize)]
pub struct ResultItem {
    pub title: String,
    pub arg: String,
    /// Unix timestamp of the copy; sorting key only.
    #[serde(skip_serializing)]
    pub timestamp: i64,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl ResultItem {
    /// Derive the launcher view of a stored record.
    pub fn from_record(record: ClipboardRecord) -> Self {
        let unix_ts = format::to_unix_timestamp(record.timestamp);
        let subtitle = format::subtitle(
            &record.content,
            unix_ts,
            record.source_app_name.as_deref(),
        );
        let title = truncate_chars(&record.content, TITLE_MAX_CHARS);

        Self {
            title,
            arg: record.content,
            timestamp: unix_ts,
            subtitle,
            icon: record.source_app_path.map(Icon::fileicon),
        }
    }
}

/// Output envelope for the launcher.
#[derive(Debug, Serialize)]
pub struct ScriptFilterOutput {
    pub skipknowledge: bool,
    pub items: Vec<ResultItem>,
}

impl ScriptFilterOutput {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self {
            skipknowledge: true,
            items,
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
