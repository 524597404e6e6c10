mod sqlite;

pub use sqlite::SqliteStore;

use wordbook_core::DictionaryError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid stored entry: {0}")]
    Entry(#[from] DictionaryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No stored row for '{0}'")]
    NotFound(String),

    #[error("'{0}' is already stored")]
    Duplicate(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
