mod command_tests;

use std::sync::atomic::{AtomicUsize, Ordering};

use wordbook_api::{FetchError, LookupService};
use wordbook_core::{RemoteRecord, parse_remote_payload};

pub const KING: &str = r#"[
    {
        "word": "king",
        "phonetic": "kɪŋ",
        "phonetics": [{"text": "kɪŋ", "audio": "//ssl.gstatic.com/dictionary/static/sounds/20200429/king--1_gb_1.mp3"}],
        "origin": "Old English cyning, cyng, of Germanic origin;related to Dutch koning and German König, also to kin.",
        "meanings": [
            {"partOfSpeech": "noun", "definitions": [
                {"definition": "the male ruler of an independent state.", "example": "King Henry VIII",
                 "synonyms": ["ruler", "sovereign", "monarch"], "antonyms": []}
            ]}
        ]
    },
    {
        "word": "god save the king",
        "meanings": [
            {"partOfSpeech": "noun", "definitions": [
                {"definition": "the British national anthem.", "synonyms": [], "antonyms": []}
            ]}
        ]
    }
]"#;

/// What the mock answers with
pub enum Reply {
    Payload(&'static str),
    NoDefinitions,
    Status(u16),
}

pub struct MockDictionary {
    reply: Reply,
    calls: AtomicUsize,
}

impl MockDictionary {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LookupService for MockDictionary {
    async fn fetch(&self, word: &str) -> Result<Vec<RemoteRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Reply::Payload(json) => {
                parse_remote_payload(json).map_err(|e| FetchError::Decode(e.to_string()))
            }
            Reply::NoDefinitions => Err(FetchError::NoDefinitions(word.to_string())),
            Reply::Status(code) => Err(FetchError::Status(code)),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
