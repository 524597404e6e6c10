//! Adapters from external shapes into [`WordEntry`].
//!
//! Three sources feed the index: the remote lookup service, persisted rows
//! and the add/edit form. Each has its own adapter here; everything
//! downstream only sees the canonical schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entry::{Definition, Meaning, Pronunciation, RelatedWord, WordEntry, normalize_name};
use crate::error::{DictionaryError, Result};

pub const SYNONYMS: &str = "synonyms";
pub const ANTONYMS: &str = "antonyms";

// Raw records as returned by the Free Dictionary API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Option<Vec<RemotePhonetic>>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Option<Vec<RemoteMeaning>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemotePhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteMeaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Option<Vec<RemoteDefinition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteDefinition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub antonyms: Option<Vec<String>>,
}

/// Parse a remote response body
pub fn parse_remote_payload(json: &str) -> Result<Vec<RemoteRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Convert every remote record, in order.
///
/// A record without `word` or `meanings` is rejected; every other absent
/// field becomes an empty value.
pub fn from_remote_payload(payload: &[RemoteRecord]) -> Result<Vec<WordEntry>> {
    payload.iter().map(from_remote_record).collect()
}

pub fn from_remote_record(record: &RemoteRecord) -> Result<WordEntry> {
    let word = record
        .word
        .as_deref()
        .ok_or(DictionaryError::MissingField("word"))?;
    let name = normalize_name(word);
    if name.is_empty() {
        return Err(DictionaryError::Validation(
            "remote record has an empty word".to_string(),
        ));
    }

    let meanings = record
        .meanings
        .as_ref()
        .ok_or(DictionaryError::MissingField("meanings"))?;

    let mut pronunciations: Vec<Pronunciation> = record
        .phonetics
        .iter()
        .flatten()
        .map(|phonetic| Pronunciation {
            text: phonetic.text.clone().unwrap_or_default(),
            audio: phonetic.audio.clone().filter(|audio| !audio.is_empty()),
        })
        .filter(|p| !p.text.is_empty() || p.audio.is_some())
        .collect();

    if pronunciations.is_empty()
        && let Some(phonetic) = record.phonetic.as_ref().filter(|p| !p.is_empty())
    {
        pronunciations.push(Pronunciation::new(phonetic.clone(), None));
    }

    let meanings = meanings
        .iter()
        .map(|meaning| Meaning {
            part_of_speech: meaning.part_of_speech.clone().unwrap_or_default(),
            definitions: meaning
                .definitions
                .iter()
                .flatten()
                .map(from_remote_definition)
                .collect(),
        })
        .collect();

    Ok(WordEntry {
        name,
        etymology: record.origin.clone().unwrap_or_default(),
        pronunciations,
        meanings,
    })
}

// Both groups are always emitted, even when empty
fn from_remote_definition(definition: &RemoteDefinition) -> Definition {
    Definition {
        definition: definition.definition.clone().unwrap_or_default(),
        example: definition.example.clone(),
        related_words: vec![
            RelatedWord {
                relationship_type: SYNONYMS.to_string(),
                words: definition.synonyms.clone().unwrap_or_default(),
            },
            RelatedWord {
                relationship_type: ANTONYMS.to_string(),
                words: definition.antonyms.clone().unwrap_or_default(),
            },
        ],
    }
}

/// Flat values collected by the add/edit form.
///
/// Rows are owned by the form and passed in whole; blank rows are skipped
/// by [`from_form_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: String,
    pub etymology: String,
    pub pronunciations: Vec<PronunciationFields>,
    pub meanings: Vec<MeaningFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PronunciationFields {
    pub text: String,
    pub audio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeaningFields {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionFields {
    pub definition: String,
    pub example: String,
    pub related_words: Vec<RelatedWordFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedWordFields {
    pub relationship_type: String,
    /// Comma separated, e.g. `"ruler, monarch"`
    pub words: String,
}

/// Build an entry from form input.
///
/// Fails with [`DictionaryError::Validation`] when the name is blank. Rows
/// missing their required field are dropped.
pub fn from_form_fields(fields: &FormFields) -> Result<WordEntry> {
    let name = normalize_name(&fields.name);
    if name.is_empty() {
        return Err(DictionaryError::Validation(
            "Word field cannot be empty".to_string(),
        ));
    }

    let pronunciations = fields
        .pronunciations
        .iter()
        .filter_map(|row| {
            let text = row.text.trim();
            let audio = optional(&row.audio);
            if text.is_empty() && audio.is_none() {
                tracing::debug!("Dropping empty pronunciation row");
                return None;
            }
            Some(Pronunciation::new(text, audio))
        })
        .collect();

    let meanings = fields
        .meanings
        .iter()
        .filter_map(|row| {
            let part_of_speech = row.part_of_speech.trim();
            if part_of_speech.is_empty() {
                tracing::debug!("Dropping meaning row without part of speech");
                return None;
            }
            Some(Meaning::new(
                part_of_speech,
                row.definitions.iter().filter_map(definition_from_row).collect(),
            ))
        })
        .collect();

    Ok(WordEntry {
        name,
        etymology: fields.etymology.trim().to_string(),
        pronunciations,
        meanings,
    })
}

fn definition_from_row(row: &DefinitionFields) -> Option<Definition> {
    let text = row.definition.trim();
    if text.is_empty() {
        tracing::debug!("Dropping definition row without text");
        return None;
    }

    let related_words = row
        .related_words
        .iter()
        .filter_map(|related| {
            let relationship_type = related.relationship_type.trim();
            if relationship_type.is_empty() {
                tracing::debug!("Dropping related words row without relationship type");
                return None;
            }
            Some(RelatedWord {
                relationship_type: relationship_type.to_string(),
                words: split_words(&related.words),
            })
        })
        .collect();

    Some(Definition {
        definition: text.to_string(),
        example: optional(&row.example),
        related_words,
    })
}

/// Split a comma separated words field into trimmed, non-empty tokens
pub fn split_words(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Pre-fill form values from an existing entry
pub fn to_form_fields(entry: &WordEntry) -> FormFields {
    FormFields {
        name: entry.name.clone(),
        etymology: entry.etymology.clone(),
        pronunciations: entry
            .pronunciations
            .iter()
            .map(|p| PronunciationFields {
                text: p.text.clone(),
                audio: p.audio.clone().unwrap_or_default(),
            })
            .collect(),
        meanings: entry
            .meanings
            .iter()
            .map(|meaning| MeaningFields {
                part_of_speech: meaning.part_of_speech.clone(),
                definitions: meaning
                    .definitions
                    .iter()
                    .map(|d| DefinitionFields {
                        definition: d.definition.clone(),
                        example: d.example.clone().unwrap_or_default(),
                        related_words: d
                            .related_words
                            .iter()
                            .map(|r| RelatedWordFields {
                                relationship_type: r.relationship_type.clone(),
                                words: r.words.join(", "),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Accept a persisted row holding the canonical JSON shape
pub fn entry_from_value(value: Value) -> Result<WordEntry> {
    let object = match &value {
        Value::Object(object) => object,
        other => {
            return Err(DictionaryError::TypeMismatch {
                expected: "object",
                found: json_kind(other),
            });
        }
    };

    if !object.contains_key("name") {
        return Err(DictionaryError::MissingField("name"));
    }

    let mut entry: WordEntry = serde_json::from_value(value)?;
    entry.name = normalize_name(&entry.name);
    if entry.name.is_empty() {
        return Err(DictionaryError::Validation(
            "stored entry has an empty name".to_string(),
        ));
    }

    Ok(entry)
}

pub fn entry_from_json(json: &str) -> Result<WordEntry> {
    entry_from_value(serde_json::from_str(json)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
