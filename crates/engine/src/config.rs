use crate::options::{CountKey, PosTag, TokenizerKind};
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_TOP_K: usize = 5;

/// Where a run reads its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// Text already in memory, with the name used in reports.
    Text { name: String, content: String },
    /// Raw bytes (e.g. stdin), decoded with the same checks as files.
    Bytes { name: String, content: Vec<u8> },
}

impl InputSource {
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Text { name, .. } | Self::Bytes { name, .. } => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct AnalysisOptions {
    #[builder(default = "DEFAULT_TOP_K")]
    pub top_k: usize,
    /// Also report the N least frequent keys.
    #[builder(default)]
    pub bottom_k: Option<usize>,
    /// Include the full ranking in the report.
    #[builder(default)]
    pub ranking: bool,
    #[builder(default)]
    pub key: CountKey,
    /// Keep only tokens carrying one of these tags; empty keeps everything.
    #[builder(default)]
    pub pos: Vec<PosTag>,
    #[builder(default = "1")]
    pub min_len: usize,
    /// Treat an empty token stream as an error instead of a zero report.
    #[builder(default)]
    pub require_nonempty: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            bottom_k: None,
            ranking: false,
            key: CountKey::Text,
            pos: vec![],
            min_len: 1,
            require_nonempty: false,
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub inputs: Vec<InputSource>,
    #[builder(default)]
    pub tokenizer: TokenizerKind,
    #[builder(default)]
    pub analysis: AnalysisOptions,
    /// Count all inputs as one stream.
    #[builder(default)]
    pub merge: bool,
    /// Abort on the first failing input.
    #[builder(default)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default_impl() {
        let built = AnalysisOptionsBuilder::default().build().unwrap();
        assert_eq!(built, AnalysisOptions::default());
    }

    #[test]
    fn test_builder_overrides() {
        let opts = AnalysisOptionsBuilder::default()
            .top_k(10usize)
            .bottom_k(Some(3usize))
            .key(CountKey::Lemma)
            .pos(vec![PosTag::Verb])
            .build()
            .unwrap();
        assert_eq!(opts.top_k, 10);
        assert_eq!(opts.bottom_k, Some(3));
        assert_eq!(opts.key, CountKey::Lemma);
        assert_eq!(opts.pos, vec![PosTag::Verb]);
        assert_eq!(opts.min_len, 1);
    }

    #[test]
    fn test_input_source_name() {
        assert_eq!(InputSource::File(PathBuf::from("a/b.txt")).name(), "a/b.txt");
        let text = InputSource::Text {
            name: "inline".to_string(),
            content: String::new(),
        };
        assert_eq!(text.name(), "inline");
        let stdin = InputSource::Bytes {
            name: "<stdin>".to_string(),
            content: Vec::new(),
        };
        assert_eq!(stdin.name(), "<stdin>");
    }
}
