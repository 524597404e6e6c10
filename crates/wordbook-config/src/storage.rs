use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_database_path() -> PathBuf {
    PathBuf::from("words.db")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file holding one row per word
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let database_path = env::var("WORDBOOK_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());

        Self { database_path }
    }
}
