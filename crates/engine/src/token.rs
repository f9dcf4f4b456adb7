use serde::{Deserialize, Serialize};

use crate::options::{CountKey, PosTag};

/// A single token as handed over by a tokenizer or external tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: Option<PosTag>,
    pub lemma: Option<String>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: None,
            lemma: None,
        }
    }

    pub fn tagged(text: impl Into<String>, pos: PosTag, lemma: Option<String>) -> Self {
        Self {
            text: text.into(),
            pos: Some(pos),
            lemma,
        }
    }

    /// The string this token is counted under.
    pub fn key(&self, key: CountKey) -> &str {
        match key {
            CountKey::Text => &self.text,
            CountKey::Lemma => self.lemma.as_deref().unwrap_or(&self.text),
        }
    }
}
