//! Read-only store access and schema probing.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::error::StoreError;

/// Open the clipboard store read-only.
///
/// The file must already exist; this tool never creates or migrates a
/// store. A missing or unreadable path surfaces as
/// [`StoreError::Unavailable`].
pub async fn open_store(path: &Path) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))
        .map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?
        .read_only(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })
}

/// Which optional columns the store carries.
#[derive(Debug, Clone, Copy)]
pub struct StoreColumns {
    /// True when both `app` and `apppath` columns exist.
    pub has_source_app: bool,
}

/// Probe the `clipboard` table layout.
///
/// Older stores carry only `item` and `ts`; newer ones add the source
/// application columns. A database without a `clipboard` table at all is
/// not a clipboard store.
pub async fn store_columns(pool: &SqlitePool, path: &Path) -> Result<StoreColumns, StoreError> {
    let rows = sqlx::query("PRAGMA table_info(clipboard)")
        .fetch_all(pool)
        .await
        .map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

    if rows.is_empty() {
        return Err(StoreError::MissingTable {
            path: path.to_path_buf(),
        });
    }

    let names: Vec<String> = rows
        .iter()
        .map(|row| row.get::<String, _>("name"))
        .collect();
    let has_source_app =
        names.iter().any(|n| n == "app") && names.iter().any(|n| n == "apppath");

    Ok(StoreColumns { has_source_app })
}
