pub mod entry;
pub mod error;
pub mod format;
pub mod index;
pub mod normalize;
pub mod ordered;
pub mod store;

pub use entry::{Definition, Meaning, Pronunciation, RelatedWord, WordEntry, normalize_name};
pub use error::{DictionaryError, Result};
pub use format::{EntryView, render_html, render_text};
pub use index::WordIndex;
pub use normalize::{
    DefinitionFields, FormFields, MeaningFields, PronunciationFields, RelatedWordFields,
    RemoteRecord, entry_from_json, entry_from_value, from_form_fields, from_remote_payload,
    parse_remote_payload, to_form_fields,
};
pub use ordered::{Duplicates, OrderedList, OrderedListError};
pub use store::EntryStore;
