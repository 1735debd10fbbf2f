use std::path::PathBuf;

use thiserror::Error;

/// Failures opening or reading the record store.
///
/// Every variant terminates the run with a non-zero exit; there is no
/// structured error channel to the launcher, which treats absent output as
/// a generic failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store path is missing, unreadable, or not a SQLite database.
    #[error("clipboard store unavailable at {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    /// The database opened but holds no `clipboard` table.
    #[error("no clipboard table in store at {path}")]
    MissingTable { path: PathBuf },
}
