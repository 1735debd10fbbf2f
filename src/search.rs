//! Keyword search over the clipboard store.
//!
//! One invocation performs one store open, one candidate query, and one
//! close. Matching is case-sensitive substring containment: SQLite `LIKE`
//! folds ASCII case, so the SQL pass is only a prefilter and the exact
//! check happens in Rust.

use std::path::Path;

use anyhow::Result;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::db;
use crate::models::{ClipboardRecord, ResultItem};
use crate::normalize;

/// Search the store for entries containing `keyword`, most recent first.
///
/// The keyword is normalized for kana equivalence before matching. An empty
/// keyword matches every entry. No matches is an empty list, not an error.
pub async fn search_store(keyword: &str, store_path: &Path) -> Result<Vec<ResultItem>> {
    let needle = normalize::normalize_keyword(keyword);

    let pool = db::open_store(store_path).await?;
    debug!(store = %store_path.display(), "opened clipboard store");

    // Close on every exit path before surfacing the query outcome.
    let fetched = fetch_matches(&pool, store_path, &needle).await;
    pool.close().await;

    let mut items = fetched?;
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(items)
}

async fn fetch_matches(
    pool: &SqlitePool,
    store_path: &Path,
    needle: &str,
) -> Result<Vec<ResultItem>> {
    let columns = db::store_columns(pool, store_path).await?;

    let sql = if columns.has_source_app {
        "SELECT item, ts, app, apppath FROM clipboard WHERE item LIKE ? ESCAPE '\\'"
    } else {
        "SELECT item, ts FROM clipboard WHERE item LIKE ? ESCAPE '\\'"
    };

    let pattern = format!("%{}%", escape_like(needle));
    let rows = sqlx::query(sql).bind(&pattern).fetch_all(pool).await?;
    debug!(candidates = rows.len(), "fetched candidate rows");

    let items: Vec<ResultItem> = rows
        .iter()
        .map(|row| ClipboardRecord {
            content: row.get("item"),
            timestamp: row.get("ts"),
            source_app_name: if columns.has_source_app {
                row.get("app")
            } else {
                None
            },
            source_app_path: if columns.has_source_app {
                row.get("apppath")
            } else {
                None
            },
        })
        .filter(|record| record.content.contains(needle))
        .map(ResultItem::from_record)
        .collect();

    debug!(matches = items.len(), "exact containment matches");
    Ok(items)
}

/// Escape `LIKE` metacharacters so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
