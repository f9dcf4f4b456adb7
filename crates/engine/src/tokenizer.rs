//! Tokenizer implementations.
//!
//! Tokenizers are passed explicitly to the processor, so callers can plug in
//! any external tagger by implementing [`Tokenizer`].

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{EngineError, Result};
use crate::options::{PosTag, TokenizerKind};
use crate::token::Token;

pub trait Tokenizer {
    /// Split `text` into tokens in reading order.
    ///
    /// # Errors
    /// Returns an error when the text cannot be interpreted by this tokenizer.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

/// Lowercases and extracts `\b\w+\b` matches.
#[derive(Debug, Clone)]
pub struct RegexWordTokenizer {
    pattern: Regex,
}

impl RegexWordTokenizer {
    /// # Errors
    /// Returns an error if the word pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"\b\w+\b")?,
        })
    }
}

impl Tokenizer for RegexWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let lowered = text.to_lowercase();
        Ok(self
            .pattern
            .find_iter(&lowered)
            .map(|m| Token::new(m.as_str()))
            .collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let lowered = text.to_lowercase();
        Ok(lowered.unicode_words().map(Token::new).collect())
    }
}

/// Reads the exported output of an external tagger.
///
/// One token per line: `text<TAB>POS[<TAB>lemma]`. Blank lines and `#` comments
/// are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedTokenizer;

impl TaggedTokenizer {
    fn parse_line(line: &str, line_no: usize) -> Result<Token> {
        let mut fields = line.split('\t');
        let text = fields.next().unwrap_or("").trim();
        let pos = fields.next().ok_or_else(|| EngineError::TaggedLine {
            line: line_no,
            reason: "expected `text<TAB>POS[<TAB>lemma]`".to_string(),
        })?;
        if text.is_empty() {
            return Err(EngineError::TaggedLine {
                line: line_no,
                reason: "empty token text".to_string(),
            });
        }
        let pos: PosTag = pos.parse().map_err(|e: EngineError| EngineError::TaggedLine {
            line: line_no,
            reason: e.to_string(),
        })?;
        let lemma = fields
            .next()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_lowercase);

        Ok(Token::tagged(text.to_lowercase(), pos, lemma))
    }
}

impl Tokenizer for TaggedTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|(idx, line)| Self::parse_line(line.trim_end_matches('\r'), idx + 1))
            .collect()
    }
}

/// Build the tokenizer selected by `kind`.
///
/// # Errors
/// Returns an error if the tokenizer cannot be constructed.
pub fn build(kind: TokenizerKind) -> Result<Box<dyn Tokenizer>> {
    Ok(match kind {
        TokenizerKind::Regex => Box::new(RegexWordTokenizer::new()?),
        TokenizerKind::Unicode => Box::new(UnicodeWordTokenizer),
        TokenizerKind::Tagged => Box::new(TaggedTokenizer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_regex_tokenizer_case_folds_and_strips_punctuation() {
        let tokens = RegexWordTokenizer::new()
            .unwrap()
            .tokenize("Hello, hello WORLD!")
            .unwrap();
        assert_eq!(texts(&tokens), ["hello", "hello", "world"]);
        assert!(tokens.iter().all(|t| t.pos.is_none() && t.lemma.is_none()));
    }

    #[test]
    fn test_regex_tokenizer_splits_contractions() {
        let tokens = RegexWordTokenizer::new()
            .unwrap()
            .tokenize("I'm BATMAN.")
            .unwrap();
        assert_eq!(texts(&tokens), ["i", "m", "batman"]);
    }

    #[test]
    fn test_unicode_tokenizer_keeps_contractions() {
        let tokens = UnicodeWordTokenizer.tokenize("I'm BATMAN.").unwrap();
        assert_eq!(texts(&tokens), ["i'm", "batman"]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert!(RegexWordTokenizer::new().unwrap().tokenize("  ...  ").unwrap().is_empty());
        assert!(UnicodeWordTokenizer.tokenize("").unwrap().is_empty());
        assert!(TaggedTokenizer.tokenize("\n# header\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_tagged_tokenizer_reads_fields() {
        let input = "# text\tpos\tlemma\nRan\tVERB\tRun\nGotham\tPROPN\n\ncity\tnoun\tcity\r\n";
        let tokens = TaggedTokenizer.tokenize(input).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::tagged("ran", PosTag::Verb, Some("run".to_string())),
                Token::tagged("gotham", PosTag::Propn, None),
                Token::tagged("city", PosTag::Noun, Some("city".to_string())),
            ]
        );
    }

    #[test]
    fn test_tagged_tokenizer_reports_line_of_unknown_tag() {
        let err = TaggedTokenizer
            .tokenize("ran\tVERB\nflew\tVBD\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::TaggedLine { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_tagged_tokenizer_requires_tab() {
        let err = TaggedTokenizer.tokenize("just words here").unwrap_err();
        assert!(matches!(err, EngineError::TaggedLine { line: 1, .. }));
    }
}
