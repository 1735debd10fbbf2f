//! # clipfind
//!
//! A small utility that searches a local clipboard-history database for
//! entries matching a keyword and emits the results as JSON for a
//! launcher/workflow tool.
//!
//! One invocation is one query: open the store read-only, fetch the rows
//! containing the keyword, shape them into Script Filter items, print the
//! envelope on stdout, exit.
//!
//! ```bash
//! clipfind "deploy" ~/Library/.../clipboard.alfdb
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`db`] | Read-only SQLite store access and schema probing |
//! | [`error`] | Store error taxonomy |
//! | [`format`] | Timestamp conversion and subtitle rendering |
//! | [`models`] | Stored record and launcher-facing result types |
//! | [`normalize`] | Kana-equivalence keyword normalization |
//! | [`search`] | Candidate fetch and containment matching |

pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
pub mod search;
