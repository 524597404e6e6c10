use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Canonical record for one dictionary headword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub name: String,
    #[serde(default)]
    pub etymology: String,
    #[serde(default)]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// Definitions grouped under one part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub related_words: Vec<RelatedWord>,
}

/// Tagged group of words related to a definition, e.g. synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedWord {
    pub relationship_type: String,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Normalize a headword into its index key: trimmed, NFC, lowercase
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfc().collect::<String>().to_lowercase()
}

impl WordEntry {
    /// Create an empty entry. The name is normalized with [`normalize_name`].
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            etymology: String::new(),
            pronunciations: Vec::new(),
            meanings: Vec::new(),
        }
    }

    pub fn with_etymology(mut self, etymology: impl Into<String>) -> Self {
        self.etymology = etymology.into();
        self
    }

    pub fn with_pronunciation(mut self, pronunciation: Pronunciation) -> Self {
        self.pronunciations.push(pronunciation);
        self
    }

    pub fn with_meaning(mut self, meaning: Meaning) -> Self {
        self.meanings.push(meaning);
        self
    }
}

impl Pronunciation {
    pub fn new(text: impl Into<String>, audio: Option<String>) -> Self {
        Self {
            text: text.into(),
            audio,
        }
    }
}

impl Meaning {
    pub fn new(part_of_speech: impl Into<String>, definitions: Vec<Definition>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definitions,
        }
    }
}

impl Definition {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            example: None,
            related_words: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_related(mut self, related: RelatedWord) -> Self {
        self.related_words.push(related);
        self
    }
}

impl RelatedWord {
    pub fn new<I, S>(relationship_type: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            relationship_type: relationship_type.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_normalized() {
        assert_eq!(WordEntry::new("  King ").name, "king");
        // decomposed "König" folds to the composed form
        assert_eq!(WordEntry::new("Ko\u{308}nig").name, "k\u{f6}nig");
    }

    #[test]
    fn serializes_canonical_shape() {
        let entry = WordEntry::new("hi")
            .with_etymology("From nowhere")
            .with_meaning(Meaning::new(
                "noun",
                vec![
                    Definition::new("Something something")
                        .with_example("Huh?")
                        .with_related(RelatedWord::new("synonyms", ["idk", "idc"])),
                ],
            ));

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "hi",
                "etymology": "From nowhere",
                "pronunciations": [],
                "meanings": [{
                    "part_of_speech": "noun",
                    "definitions": [{
                        "definition": "Something something",
                        "example": "Huh?",
                        "related_words": [
                            {"relationship_type": "synonyms", "words": ["idk", "idc"]}
                        ]
                    }]
                }]
            })
        );
    }
}
