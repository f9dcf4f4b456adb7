// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};
use lexstat_engine::config::DEFAULT_TOP_K;
use lexstat_engine::options::PosTag;

use crate::options::{CountKey, OutputFormat, TokenizerKind};
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "lexstat",
    version = crate::VERSION,
    about = "Word-frequency and lexical diversity reports for plain-text scripts"
)]
pub struct Args {
    /// Input files (`-` reads stdin)
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Number of most frequent tokens to list
    #[arg(long, default_value_t = DEFAULT_TOP_K, value_parser = parsers::parse_usize, help_heading = "Output")]
    pub top: usize,

    /// Also list the N least frequent tokens
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Output")]
    pub bottom: Option<usize>,

    /// Include the full frequency ranking
    #[arg(long, help_heading = "Output")]
    pub ranking: bool,

    /// Output file (stdout when omitted)
    #[arg(long, short, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalysisArgs {
    /// How the input text is split into tokens
    #[arg(long, value_enum, default_value = "regex", help_heading = "Analysis")]
    pub tokenizer: TokenizerKind,

    /// Token field to count
    #[arg(long, value_enum, default_value = "text", help_heading = "Analysis")]
    pub key: CountKey,

    /// Keep only these part-of-speech tags (comma separated, e.g. VERB,NOUN)
    #[arg(long, value_delimiter = ',', value_parser = parsers::parse_pos_tag, help_heading = "Analysis")]
    pub pos: Vec<PosTag>,

    /// Drop tokens shorter than N characters
    #[arg(long, default_value_t = 1, value_parser = parsers::parse_positive_usize, help_heading = "Analysis")]
    pub min_len: usize,

    /// Count all inputs as a single stream
    #[arg(long, help_heading = "Analysis")]
    pub merge: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Fail when an input produces no tokens
    #[arg(long, help_heading = "Behavior")]
    pub require_nonempty: bool,

    /// Abort on the first input error
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lexstat", "script.txt"]).unwrap();
        assert_eq!(args.paths, vec![PathBuf::from("script.txt")]);
        assert_eq!(args.output.format, OutputFormat::Table);
        assert_eq!(args.output.top, DEFAULT_TOP_K);
        assert_eq!(args.output.bottom, None);
        assert_eq!(args.analysis.tokenizer, TokenizerKind::Regex);
        assert_eq!(args.analysis.min_len, 1);
        assert!(args.analysis.pos.is_empty());
        assert!(!args.behavior.strict);
    }

    #[test]
    fn test_pos_list() {
        let args = Args::try_parse_from(["lexstat", "--pos", "verb,NOUN", "a.tsv"]).unwrap();
        assert_eq!(args.analysis.pos, vec![PosTag::Verb, PosTag::Noun]);
        assert!(Args::try_parse_from(["lexstat", "--pos", "VBZ", "a.tsv"]).is_err());
    }

    #[test]
    fn test_paths_required() {
        assert!(Args::try_parse_from(["lexstat"]).is_err());
    }
}
