use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Which field of a token is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountKey {
    /// Case-folded surface text
    #[default]
    Text,
    /// Lemma, falling back to the text when the tagger supplied none
    Lemma,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizerKind {
    /// `\b\w+\b` over the lowercased text
    #[default]
    Regex,
    /// Unicode word boundaries (UAX #29)
    Unicode,
    /// Pre-tagged `text<TAB>POS[<TAB>lemma]` lines
    Tagged,
}

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PosTag {
    pub const ALL: [Self; 17] = [
        Self::Adj,
        Self::Adp,
        Self::Adv,
        Self::Aux,
        Self::Cconj,
        Self::Det,
        Self::Intj,
        Self::Noun,
        Self::Num,
        Self::Part,
        Self::Pron,
        Self::Propn,
        Self::Punct,
        Self::Sconj,
        Self::Sym,
        Self::Verb,
        Self::X,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == upper)
            .ok_or_else(|| EngineError::UnknownPosTag(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_parse_is_case_insensitive() {
        assert_eq!("verb".parse::<PosTag>().unwrap(), PosTag::Verb);
        assert_eq!(" PROPN ".parse::<PosTag>().unwrap(), PosTag::Propn);
        assert_eq!("x".parse::<PosTag>().unwrap(), PosTag::X);
    }

    #[test]
    fn test_pos_tag_unknown() {
        let err = "VBD".parse::<PosTag>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownPosTag(ref t) if t == "VBD"));
    }

    #[test]
    fn test_pos_tag_display_roundtrips() {
        for tag in PosTag::ALL {
            assert_eq!(tag.to_string().parse::<PosTag>().unwrap(), tag);
        }
    }
}
