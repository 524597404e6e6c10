use crate::entry::WordEntry;

/// Persistent row store keyed by word name
pub trait EntryStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert a new row
    fn save(&mut self, entry: &WordEntry) -> Result<(), Self::Error>;

    /// All stored entries in canonical form
    fn fetch_all(&self) -> Result<Vec<WordEntry>, Self::Error>;

    /// Overwrite the row with the entry's name
    fn update(&mut self, entry: &WordEntry) -> Result<(), Self::Error>;

    /// Move the row named `old_name` to the entry's name and content in one
    /// step; the old row stays when this fails
    fn rename(&mut self, old_name: &str, entry: &WordEntry) -> Result<(), Self::Error>;

    /// Remove the row with this name
    fn delete(&mut self, name: &str) -> Result<(), Self::Error>;
}
