use crate::config::{AnalysisOptions, InputSource};
use crate::error::{EngineError, Result};
use crate::report::{Report, frequency_report};
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use std::path::Path;

/// Read a whole file as strict UTF-8 text.
///
/// # Errors
/// Fails when the file cannot be read, contains NUL bytes, or is not UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode(bytes, &path.display().to_string())
}

/// Decode raw input bytes; binary and non-UTF-8 input are rejected.
///
/// # Errors
/// Returns [`EngineError::BinaryInput`] or [`EngineError::Decode`].
pub fn decode(bytes: Vec<u8>, source_name: &str) -> Result<String> {
    if bytes.contains(&0) {
        return Err(EngineError::BinaryInput {
            source_name: source_name.to_string(),
        });
    }
    String::from_utf8(bytes).map_err(|e| EngineError::Decode {
        source_name: source_name.to_string(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Tokenize `text` and apply the POS and length filters.
///
/// # Errors
/// Propagates tokenizer failures.
pub fn select_tokens(text: &str, tokenizer: &dyn Tokenizer, options: &AnalysisOptions) -> Result<Vec<Token>> {
    let tokens = tokenizer.tokenize(text)?;
    Ok(tokens
        .into_iter()
        .filter(|t| keep(t, options))
        .collect())
}

fn keep(token: &Token, options: &AnalysisOptions) -> bool {
    if !options.pos.is_empty() && !token.pos.is_some_and(|p| options.pos.contains(&p)) {
        return false;
    }
    token.key(options.key).chars().count() >= options.min_len
}

fn report_for(source: &str, tokens: &[Token], options: &AnalysisOptions) -> Result<Report> {
    frequency_report(source, tokens.iter().map(|t| t.key(options.key)), options)
}

/// Analyse in-memory text.
///
/// # Errors
/// Propagates tokenizer failures and the empty-input policy.
pub fn process_text(
    source: &str,
    text: &str,
    tokenizer: &dyn Tokenizer,
    options: &AnalysisOptions,
) -> Result<Report> {
    let tokens = select_tokens(text, tokenizer, options)?;
    log::debug!("{source}: {} tokens selected", tokens.len());
    report_for(source, &tokens, options)
}

/// Analyse a single file.
///
/// # Errors
/// Fails on read/decoding errors, tokenizer failures, or an empty stream
/// when `require_nonempty` is set.
pub fn process_file(path: &Path, tokenizer: &dyn Tokenizer, options: &AnalysisOptions) -> Result<Report> {
    let text = read_text(path)?;
    process_text(&path.display().to_string(), &text, tokenizer, options)
}

/// Produce the text of any input source.
///
/// # Errors
/// See [`read_text`] and [`decode`].
pub fn load_text(input: &InputSource) -> Result<String> {
    match input {
        InputSource::File(path) => read_text(path),
        InputSource::Text { content, .. } => Ok(content.clone()),
        InputSource::Bytes { name, content } => decode(content.clone(), name),
    }
}

/// Analyse any input source.
///
/// # Errors
/// See [`load_text`] and [`process_text`].
pub fn process_input(input: &InputSource, tokenizer: &dyn Tokenizer, options: &AnalysisOptions) -> Result<Report> {
    let text = load_text(input)?;
    process_text(&input.name(), &text, tokenizer, options)
}

/// Load and filter the tokens of any input source.
///
/// # Errors
/// See [`load_text`] and [`select_tokens`].
pub fn load_tokens(input: &InputSource, tokenizer: &dyn Tokenizer, options: &AnalysisOptions) -> Result<Vec<Token>> {
    select_tokens(&load_text(input)?, tokenizer, options)
}

/// Build one report over a pre-collected token stream.
///
/// # Errors
/// Returns [`EngineError::EmptyInput`] under `require_nonempty`.
pub fn process_tokens(source: &str, tokens: &[Token], options: &AnalysisOptions) -> Result<Report> {
    report_for(source, tokens, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CountKey, PosTag};
    use crate::tokenizer::{RegexWordTokenizer, TaggedTokenizer};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_process_file_counts_words() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Gotham needs me.\nGotham NEEDS a hero!").unwrap();

        let tokenizer = RegexWordTokenizer::new().unwrap();
        let options = AnalysisOptions {
            top_k: 2,
            ..AnalysisOptions::default()
        };
        let report = process_file(file.path(), &tokenizer, &options).unwrap();

        assert_eq!(report.total_count, 7);
        assert_eq!(report.unique_count, 5);
        assert_eq!(report.top_k[0].token, "gotham");
        assert_eq!(report.top_k[1].token, "needs");
        assert_eq!(report.source, file.path().display().to_string());
    }

    #[test]
    fn test_process_file_missing() {
        let tokenizer = RegexWordTokenizer::new().unwrap();
        let err = process_file(Path::new("/definitely/not/here.txt"), &tokenizer, &AnalysisOptions::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"abc\xff\xfedef").unwrap();

        let tokenizer = RegexWordTokenizer::new().unwrap();
        let err = process_file(file.path(), &tokenizer, &AnalysisOptions::default()).unwrap_err();
        assert!(matches!(err, EngineError::Decode { valid_up_to: 3, .. }), "{err}");
    }

    #[test]
    fn test_nul_bytes_are_binary() {
        let err = decode(b"text\0more".to_vec(), "blob").unwrap_err();
        assert!(matches!(err, EngineError::BinaryInput { ref source_name } if source_name == "blob"));
    }

    #[test]
    fn test_byte_input_is_decoded_strictly() {
        let tokenizer = RegexWordTokenizer::new().unwrap();
        let options = AnalysisOptions::default();

        let nul = InputSource::Bytes {
            name: "<stdin>".to_string(),
            content: b"text\0more".to_vec(),
        };
        let err = process_input(&nul, &tokenizer, &options).unwrap_err();
        assert!(matches!(err, EngineError::BinaryInput { ref source_name } if source_name == "<stdin>"));

        let latin1 = InputSource::Bytes {
            name: "<stdin>".to_string(),
            content: b"caf\xe9".to_vec(),
        };
        let err = process_input(&latin1, &tokenizer, &options).unwrap_err();
        assert!(matches!(err, EngineError::Decode { valid_up_to: 3, .. }), "{err}");

        let ok = InputSource::Bytes {
            name: "<stdin>".to_string(),
            content: "café au lait".as_bytes().to_vec(),
        };
        let report = process_input(&ok, &tokenizer, &options).unwrap();
        assert_eq!(report.source, "<stdin>");
        assert_eq!(report.total_count, 3);
    }

    #[test]
    fn test_empty_file_is_zero_report() {
        let file = NamedTempFile::new().unwrap();
        let tokenizer = RegexWordTokenizer::new().unwrap();
        let report = process_file(file.path(), &tokenizer, &AnalysisOptions::default()).unwrap();
        assert_eq!(report.total_count, 0);
        assert_eq!(report.diversity, 0.0);
    }

    #[test]
    fn test_pos_filter_and_lemma_key() {
        let text = "ran\tVERB\trun\nruns\tVERB\trun\ncity\tNOUN\tcity\nflew\tVERB\tfly\n";
        let options = AnalysisOptions {
            key: CountKey::Lemma,
            pos: vec![PosTag::Verb],
            ..AnalysisOptions::default()
        };
        let report = process_text("verbs", text, &TaggedTokenizer, &options).unwrap();
        assert_eq!(report.total_count, 3);
        assert_eq!(report.unique_count, 2);
        assert_eq!(report.top_k[0].token, "run");
        assert_eq!(report.top_k[0].count, 2);
    }

    #[test]
    fn test_pos_filter_drops_untagged_tokens() {
        let tokenizer = RegexWordTokenizer::new().unwrap();
        let options = AnalysisOptions {
            pos: vec![PosTag::Noun],
            ..AnalysisOptions::default()
        };
        let report = process_text("plain", "no tags here", &tokenizer, &options).unwrap();
        assert_eq!(report.total_count, 0);
    }

    #[test]
    fn test_min_len_counts_chars() {
        let tokenizer = RegexWordTokenizer::new().unwrap();
        let options = AnalysisOptions {
            min_len: 3,
            ..AnalysisOptions::default()
        };
        let tokens = select_tokens("a an ant été", &tokenizer, &options).unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["ant", "été"]);
    }
}
