use std::cmp::Ordering;

use crate::entry::{WordEntry, normalize_name};
use crate::error::{DictionaryError, Result};
use crate::ordered::{OrderedList, OrderedListError};

// Orders and compares entries by name only
#[derive(Debug, Clone)]
struct ByName(WordEntry);

impl PartialEq for ByName {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for ByName {}

impl PartialOrd for ByName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.name.cmp(&other.0.name)
    }
}

/// Sorted, duplicate-free collection of entries keyed by name
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    entries: OrderedList<ByName>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let mut index = Self::new();
        index.extend(entries);
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter().map(|slot| &slot.0)
    }

    /// Add an entry; a second entry with the same name is ignored.
    /// Returns whether the entry was added.
    pub fn add(&mut self, entry: WordEntry) -> bool {
        let name = entry.name.clone();
        let added = self.entries.insert(ByName(entry));
        if !added {
            tracing::debug!("'{}' already in the index, ignoring", name);
        }
        added
    }

    /// Names in ascending order
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn lookup(&self, name: &str) -> Result<&WordEntry> {
        self.position(name)
            .and_then(|index| self.entries.get(index))
            .map(|slot| &slot.0)
            .ok_or_else(|| DictionaryError::NotFound(normalize_name(name)))
    }

    /// Remove and return the entry with this name
    pub fn delete(&mut self, name: &str) -> Result<WordEntry> {
        let index = self
            .position(name)
            .ok_or_else(|| DictionaryError::NotFound(normalize_name(name)))?;

        self.entries
            .pop_at(index)
            .map(|slot| slot.0)
            .map_err(|err| match err {
                OrderedListError::NotFound => DictionaryError::NotFound(normalize_name(name)),
                OrderedListError::IndexOutOfRange { index, len } => {
                    DictionaryError::IndexOutOfRange { index, len }
                }
            })
    }

    /// Swap the entry named `old_name` for `new_entry`.
    ///
    /// Nothing changes when `old_name` is absent or when the new name
    /// belongs to a different entry already in the index.
    pub fn replace(&mut self, old_name: &str, new_entry: WordEntry) -> Result<()> {
        let old_key = normalize_name(old_name);
        if !self.contains(&old_key) {
            return Err(DictionaryError::NotFound(old_key));
        }
        if new_entry.name != old_key && self.contains(&new_entry.name) {
            return Err(DictionaryError::Validation(format!(
                "'{}' is already in the dictionary",
                new_entry.name
            )));
        }

        self.delete(&old_key)?;
        self.add(new_entry);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.entries
            .find_by(|slot| slot.0.name.as_str().cmp(key.as_str()))
    }
}

impl Extend<WordEntry> for WordIndex {
    fn extend<I: IntoIterator<Item = WordEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl FromIterator<WordEntry> for WordIndex {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
