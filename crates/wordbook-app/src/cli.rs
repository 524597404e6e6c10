use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use wordbook_core::{
    DefinitionFields, FormFields, MeaningFields, PronunciationFields, RelatedWordFields,
};

#[derive(Debug, Parser)]
#[command(name = "wordbook", version, about = "Personal dictionary with offline storage")]
pub struct Cli {
    /// JSON config file, environment variables are used otherwise
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overrides the configured path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List saved words in order
    List,

    /// Show a saved word
    Show {
        word: String,
        /// Render as HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Show a word, fetching and saving it when it is not saved yet
    Search {
        word: String,
        /// Never contact the remote dictionary
        #[arg(long)]
        offline: bool,
    },

    /// Add a word by hand
    Add(EntryArgs),

    /// Edit a saved word. Without fields the current form is printed as JSON.
    Edit {
        word: String,
        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Delete a saved word
    Delete { word: String },

    /// Add every word in a saved remote payload
    Import { path: PathBuf },
}

/// Form input given as flags, one row per section, or as a JSON file
#[derive(Debug, Clone, Default, Args)]
pub struct EntryArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub etymology: Option<String>,

    #[arg(long)]
    pub pronunciation: Option<String>,

    /// Audio URL for `--pronunciation`
    #[arg(long, requires = "pronunciation")]
    pub audio: Option<String>,

    #[arg(long)]
    pub part_of_speech: Option<String>,

    #[arg(long)]
    pub definition: Option<String>,

    #[arg(long)]
    pub example: Option<String>,

    /// Relationship type for `--words`, e.g. synonyms
    #[arg(long)]
    pub relationship: Option<String>,

    /// Comma separated related words
    #[arg(long, requires = "relationship")]
    pub words: Option<String>,

    /// Serialized form fields, replaces every other flag
    #[arg(
        long,
        conflicts_with_all = [
            "name", "etymology", "pronunciation", "part_of_speech",
            "definition", "example", "relationship",
        ]
    )]
    pub form: Option<PathBuf>,
}

impl EntryArgs {
    pub fn is_empty(&self) -> bool {
        self.form.is_none()
            && self.name.is_none()
            && self.etymology.is_none()
            && self.pronunciation.is_none()
            && !self.has_meaning()
    }

    /// Read the `--form` file when one was given
    pub fn read_form(&self) -> anyhow::Result<Option<FormFields>> {
        let Some(path) = &self.form else {
            return Ok(None);
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form {}", path.display()))?;
        let fields = serde_json::from_str(&json)
            .with_context(|| format!("Invalid form {}", path.display()))?;
        Ok(Some(fields))
    }

    /// Fields for a new word
    pub fn to_form_fields(&self) -> anyhow::Result<FormFields> {
        if let Some(fields) = self.read_form()? {
            return Ok(fields);
        }
        let mut fields = FormFields::default();
        self.apply_to(&mut fields);
        Ok(fields)
    }

    /// Patch existing form values: scalar flags overwrite, row flags append
    pub fn apply_to(&self, fields: &mut FormFields) {
        if let Some(name) = &self.name {
            fields.name = name.clone();
        }
        if let Some(etymology) = &self.etymology {
            fields.etymology = etymology.clone();
        }
        if let Some(text) = &self.pronunciation {
            fields.pronunciations.push(PronunciationFields {
                text: text.clone(),
                audio: self.audio.clone().unwrap_or_default(),
            });
        }
        if self.has_meaning() {
            fields.meanings.push(self.meaning_row());
        }
    }

    fn has_meaning(&self) -> bool {
        self.part_of_speech.is_some()
            || self.definition.is_some()
            || self.example.is_some()
            || self.relationship.is_some()
    }

    fn meaning_row(&self) -> MeaningFields {
        let related_words = self
            .relationship
            .iter()
            .map(|relationship_type| RelatedWordFields {
                relationship_type: relationship_type.clone(),
                words: self.words.clone().unwrap_or_default(),
            })
            .collect();

        MeaningFields {
            part_of_speech: self.part_of_speech.clone().unwrap_or_default(),
            definitions: vec![DefinitionFields {
                definition: self.definition.clone().unwrap_or_default(),
                example: self.example.clone().unwrap_or_default(),
                related_words,
            }],
        }
    }
}
