use anyhow::Context;
use wordbook_api::{FetchError, LookupService};
use wordbook_core::{
    DictionaryError, EntryStore, WordEntry, WordIndex, from_remote_payload, normalize_name,
};

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Already saved
    Saved(WordEntry),
    /// Fetched from the remote service and saved
    Fetched(WordEntry),
    /// Not saved, and the remote service had nothing or was not asked
    Missing,
}

/// In-memory index mirrored onto a persistent store.
///
/// Every mutation goes to the store first; the index only changes once the
/// store has accepted it.
pub struct Session<S: EntryStore> {
    index: WordIndex,
    store: S,
}

impl<S: EntryStore> Session<S> {
    /// Rebuild the index from everything the store holds
    pub fn load(store: S) -> anyhow::Result<Self> {
        let entries = store.fetch_all().context("Failed to load saved words")?;
        tracing::info!("Loaded {} saved words", entries.len());

        Ok(Self {
            index: WordIndex::from_entries(entries),
            store,
        })
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn lookup(&self, name: &str) -> anyhow::Result<&WordEntry> {
        Ok(self.index.lookup(name)?)
    }

    /// Save a new entry. Returns `false` when the name is already saved.
    pub fn add(&mut self, entry: WordEntry) -> anyhow::Result<bool> {
        if self.index.contains(&entry.name) {
            tracing::debug!("'{}' already saved, skipping", entry.name);
            return Ok(false);
        }

        self.store
            .save(&entry)
            .with_context(|| format!("Failed to save '{}'", entry.name))?;
        Ok(self.index.add(entry))
    }

    /// Replace the entry named `old_name`, renaming it when the new entry
    /// carries a different name.
    pub fn edit(&mut self, old_name: &str, entry: WordEntry) -> anyhow::Result<()> {
        let previous = self.index.lookup(old_name)?.clone();
        self.index.replace(&previous.name, entry.clone())?;

        let stored = if entry.name == previous.name {
            self.store.update(&entry)
        } else {
            self.store.rename(&previous.name, &entry)
        };

        if let Err(err) = stored {
            self.index.replace(&entry.name, previous.clone())?;
            return Err(err).with_context(|| format!("Failed to update '{}'", previous.name));
        }

        tracing::info!("Updated '{}'", entry.name);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> anyhow::Result<WordEntry> {
        let key = self.index.lookup(name)?.name.clone();
        self.store
            .delete(&key)
            .with_context(|| format!("Failed to delete '{key}'"))?;
        Ok(self.index.delete(&key)?)
    }

    /// Look a word up locally, then through `service` when one is given.
    ///
    /// Fetched records are all saved; the outcome carries the one matching
    /// the query, or the first when the service answered with another
    /// headword.
    pub async fn search(
        &mut self,
        word: &str,
        service: Option<&dyn LookupService>,
    ) -> anyhow::Result<SearchOutcome> {
        let key = normalize_name(word);
        if key.is_empty() {
            return Err(DictionaryError::Validation("Nothing to search for".to_string()).into());
        }

        if let Ok(entry) = self.index.lookup(&key) {
            return Ok(SearchOutcome::Saved(entry.clone()));
        }

        let Some(service) = service else {
            return Ok(SearchOutcome::Missing);
        };

        let records = match service.fetch(&key).await {
            Ok(records) => records,
            Err(FetchError::NoDefinitions(word)) => {
                tracing::warn!("{} has no definitions for '{}'", service.name(), word);
                return Ok(SearchOutcome::Missing);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to look up '{key}'"));
            }
        };

        let entries = from_remote_payload(&records)
            .with_context(|| format!("Unexpected response for '{key}'"))?;
        let Some(shown) = entries
            .iter()
            .find(|entry| entry.name == key)
            .or_else(|| entries.first())
            .cloned()
        else {
            return Ok(SearchOutcome::Missing);
        };

        for entry in entries {
            let name = entry.name.clone();
            if self.add(entry)? {
                tracing::info!("Saved '{}' from {}", name, service.name());
            }
        }

        Ok(SearchOutcome::Fetched(shown))
    }

    /// Save every entry not already present. Returns how many were added.
    pub fn import(&mut self, entries: Vec<WordEntry>) -> anyhow::Result<usize> {
        let mut added = 0;
        for entry in entries {
            if self.add(entry)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
