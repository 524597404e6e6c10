use std::fs;
use std::path::Path;

use rusqlite::{Connection, ErrorCode, params};
use wordbook_core::{EntryStore, WordEntry, entry_from_json, normalize_name};

use crate::{Result, StoreError};

const CREATE_WORDS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS words (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        data TEXT NOT NULL
    )
";

/// Row store keeping one canonical JSON document per word
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        tracing::info!("Opening word store at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(CREATE_WORDS_TABLE, [])?;
        Ok(Self { conn })
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl EntryStore for SqliteStore {
    type Error = StoreError;

    fn save(&mut self, entry: &WordEntry) -> Result<()> {
        let data = serde_json::to_string(entry)?;

        match self.conn.execute(
            "INSERT INTO words (name, data) VALUES (?1, ?2)",
            params![entry.name, data],
        ) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::Duplicate(entry.name.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn fetch_all(&self) -> Result<Vec<WordEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, data FROM words ORDER BY name")?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        // Undecodable rows are skipped
        let mut entries = Vec::new();
        for row in rows {
            let (name, data) = row?;
            match entry_from_json(&data) {
                Ok(entry) => entries.push(entry),
                Err(err) => tracing::warn!("Skipping stored word '{}': {}", name, err),
            }
        }

        tracing::debug!("Fetched {} stored entries", entries.len());
        Ok(entries)
    }

    fn update(&mut self, entry: &WordEntry) -> Result<()> {
        let data = serde_json::to_string(entry)?;
        let changed = self.conn.execute(
            "UPDATE words SET data = ?1 WHERE name = ?2",
            params![data, entry.name],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(entry.name.clone()));
        }
        Ok(())
    }

    fn rename(&mut self, old_name: &str, entry: &WordEntry) -> Result<()> {
        let old_name = normalize_name(old_name);
        let data = serde_json::to_string(entry)?;

        let changed = match self.conn.execute(
            "UPDATE words SET name = ?1, data = ?2 WHERE name = ?3",
            params![entry.name, data, old_name],
        ) {
            Ok(changed) => changed,
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                return Err(StoreError::Duplicate(entry.name.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        if changed == 0 {
            return Err(StoreError::NotFound(old_name));
        }
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let name = normalize_name(name);
        let changed = self
            .conn
            .execute("DELETE FROM words WHERE name = ?1", params![name])?;

        if changed == 0 {
            return Err(StoreError::NotFound(name));
        }
        Ok(())
    }
}
