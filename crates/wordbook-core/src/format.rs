//! Display sections for a [`WordEntry`].
//!
//! [`EntryView`] is the structured form; it renders as plain text through
//! `Display` and as HTML through [`EntryView::to_html`]. Empty sections are
//! left out of both.

use std::fmt;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::entry::{Definition, Meaning, Pronunciation, RelatedWord, WordEntry};

pub const ETYMOLOGY_LABEL: &str = "Etymology: ";
pub const PRONUNCIATIONS_LABEL: &str = "Pronunciations:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub heading: String,
    pub etymology: Option<&'a str>,
    pub pronunciations: Vec<PronunciationView<'a>>,
    pub meanings: Vec<MeaningView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationView<'a> {
    pub text: &'a str,
    pub audio: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningView<'a> {
    pub part_of_speech: Option<&'a str>,
    pub definitions: Vec<DefinitionView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionView<'a> {
    pub number: usize,
    pub text: &'a str,
    pub example: Option<&'a str>,
    pub related: Vec<RelatedView<'a>>,
}

/// One non-empty related-words group, e.g. `Synonyms: ruler, monarch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedView<'a> {
    pub label: String,
    pub words: &'a [String],
}

impl<'a> From<&'a WordEntry> for EntryView<'a> {
    fn from(entry: &'a WordEntry) -> Self {
        Self {
            heading: capitalize(&entry.name),
            etymology: non_empty(&entry.etymology),
            pronunciations: entry
                .pronunciations
                .iter()
                .filter_map(PronunciationView::from_pronunciation)
                .collect(),
            meanings: entry.meanings.iter().map(MeaningView::from).collect(),
        }
    }
}

impl<'a> PronunciationView<'a> {
    fn from_pronunciation(pronunciation: &'a Pronunciation) -> Option<Self> {
        let audio = pronunciation.audio.as_deref().and_then(non_empty);
        if pronunciation.text.is_empty() && audio.is_none() {
            return None;
        }
        Some(Self {
            text: &pronunciation.text,
            audio,
        })
    }
}

impl<'a> From<&'a Meaning> for MeaningView<'a> {
    fn from(meaning: &'a Meaning) -> Self {
        Self {
            part_of_speech: non_empty(&meaning.part_of_speech),
            definitions: meaning
                .definitions
                .iter()
                .enumerate()
                .map(|(i, definition)| DefinitionView::new(i + 1, definition))
                .collect(),
        }
    }
}

impl<'a> DefinitionView<'a> {
    fn new(number: usize, definition: &'a Definition) -> Self {
        Self {
            number,
            text: &definition.definition,
            example: definition.example.as_deref().and_then(non_empty),
            related: definition
                .related_words
                .iter()
                .filter_map(RelatedView::from_related)
                .collect(),
        }
    }
}

impl<'a> RelatedView<'a> {
    fn from_related(related: &'a RelatedWord) -> Option<Self> {
        if related.words.is_empty() {
            return None;
        }
        Some(Self {
            label: capitalize(&related.relationship_type),
            words: &related.words,
        })
    }
}

impl fmt::Display for EntryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;

        if let Some(etymology) = self.etymology {
            writeln!(f)?;
            writeln!(f, "{ETYMOLOGY_LABEL}{etymology}")?;
        }

        if !self.pronunciations.is_empty() {
            writeln!(f)?;
            writeln!(f, "{PRONUNCIATIONS_LABEL}")?;
            for (i, pronunciation) in self.pronunciations.iter().enumerate() {
                write!(f, "  {}. {}", i + 1, pronunciation.text)?;
                if let Some(audio) = pronunciation.audio {
                    write!(f, " [{audio}]")?;
                }
                writeln!(f)?;
            }
        }

        for meaning in &self.meanings {
            writeln!(f)?;
            if let Some(part_of_speech) = meaning.part_of_speech {
                writeln!(f, "Part of speech: {part_of_speech}")?;
            }
            for definition in &meaning.definitions {
                writeln!(f, "  {}. {}", definition.number, definition.text)?;
                if let Some(example) = definition.example {
                    writeln!(f, "     Example: {example}")?;
                }
                for related in &definition.related {
                    writeln!(f, "     {}: {}", related.label, related.words.join(", "))?;
                }
            }
        }

        Ok(())
    }
}

impl EntryView<'_> {
    /// Render for a rich-text detail pane
    pub fn to_html(&self) -> String {
        let mut sections = Vec::new();

        if let Some(etymology) = self.etymology {
            sections.push(format!("<b>Etymology:</b> {}", encode_text(etymology)));
        }

        if !self.pronunciations.is_empty() {
            let items: String = self
                .pronunciations
                .iter()
                .map(|p| match p.audio {
                    Some(audio) => format!(
                        "<li>{} <a href=\"{}\">&#9654;</a></li>",
                        encode_text(p.text),
                        encode_double_quoted_attribute(audio)
                    ),
                    None => format!("<li>{}</li>", encode_text(p.text)),
                })
                .collect();
            sections.push(format!("<p><b>Pronunciations:</b></p><ol>{items}</ol>"));
        }

        for meaning in &self.meanings {
            let mut section = String::new();
            if let Some(part_of_speech) = meaning.part_of_speech {
                section.push_str(&format!(
                    "<b>Part of speech:</b> {}<br />",
                    encode_text(part_of_speech)
                ));
            }
            section.push_str("<ol>");
            for definition in &meaning.definitions {
                section.push_str(&format!("<li>{}", encode_text(definition.text)));
                if let Some(example) = definition.example {
                    section.push_str(&format!("<p><i>{}</i></p>", encode_text(example)));
                }
                for related in &definition.related {
                    section.push_str(&format!(
                        "<p><b>{}:</b> {}</p>",
                        encode_text(&related.label),
                        encode_text(&related.words.join(", "))
                    ));
                }
                section.push_str("</li>");
            }
            section.push_str("</ol>");
            sections.push(section);
        }

        format!(
            "<b style='font-size: 40px'>{}</b><hr />{}",
            encode_text(&self.heading),
            sections.join("<hr />")
        )
    }
}

/// Plain-text rendering of an entry
pub fn render_text(entry: &WordEntry) -> String {
    EntryView::from(entry).to_string()
}

pub fn render_html(entry: &WordEntry) -> String {
    EntryView::from(entry).to_html()
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
