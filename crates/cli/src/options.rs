use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// `\b\w+\b` over lowercased text
    #[default]
    Regex,
    /// Unicode word boundaries
    Unicode,
    /// Pre-tagged `text<TAB>POS[<TAB>lemma]` lines from an external tagger
    Tagged,
}

/// Token field to count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum CountKey {
    #[default]
    Text,
    /// Lemma when the tagger supplied one, text otherwise
    Lemma,
}
