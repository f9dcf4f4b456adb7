//! Frequency counting and lexical diversity.
//!
//! Every ranked list produced here is ordered by count descending, with equal
//! counts kept in the order their token first appeared in the stream.

use hashbrown::HashMap;
use serde::Serialize;

use crate::config::AnalysisOptions;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// Occurrence counts for one token stream, in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<TokenCount>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count the stream in a single pass.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for token in tokens {
            let token = token.as_ref();
            table.total += 1;
            if let Some(&slot) = table.index.get(token) {
                table.entries[slot].count += 1;
            } else {
                table.index.insert(token.to_string(), table.entries.len());
                table.entries.push(TokenCount {
                    token: token.to_string(),
                    count: 1,
                });
            }
        }
        table
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn diversity(&self) -> f64 {
        diversity(self.unique(), self.total)
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Entries in first-appearance order.
    pub fn entries(&self) -> &[TokenCount] {
        &self.entries
    }

    pub fn ranking(&self) -> Vec<TokenCount> {
        let mut ranked = self.entries.clone();
        // stable: ties stay in first-appearance order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `k` most frequent entries; all of them when `k` exceeds the table.
    pub fn top_k(&self, k: usize) -> Vec<TokenCount> {
        let mut ranked = self.ranking();
        ranked.truncate(k);
        ranked
    }

    /// The last `n` entries of the ranking, least frequent first.
    pub fn bottom_k(&self, n: usize) -> Vec<TokenCount> {
        let ranked = self.ranking();
        let start = ranked.len().saturating_sub(n);
        ranked[start..].iter().rev().cloned().collect()
    }
}

/// Ratio of distinct to total tokens; 0 for an empty stream.
#[allow(clippy::cast_precision_loss)]
pub fn diversity(unique: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        unique as f64 / total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub source: String,
    pub total_count: usize,
    pub unique_count: usize,
    pub diversity: f64,
    pub top_k: Vec<TokenCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_k: Option<Vec<TokenCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Vec<TokenCount>>,
}

impl Report {
    pub fn from_table(source: impl Into<String>, table: &FrequencyTable, options: &AnalysisOptions) -> Self {
        Self {
            source: source.into(),
            total_count: table.total(),
            unique_count: table.unique(),
            diversity: table.diversity(),
            top_k: table.top_k(options.top_k),
            bottom_k: options.bottom_k.map(|n| table.bottom_k(n)),
            ranking: options.ranking.then(|| table.ranking()),
        }
    }
}

/// Build a report over already-selected keys.
///
/// # Errors
/// Returns [`EngineError::EmptyInput`] when the stream is empty and
/// `options.require_nonempty` is set.
pub fn frequency_report<I, S>(source: &str, keys: I, options: &AnalysisOptions) -> Result<Report>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = FrequencyTable::from_tokens(keys);
    if options.require_nonempty && table.total() == 0 {
        return Err(EngineError::EmptyInput {
            source_name: source.to_string(),
        });
    }
    Ok(Report::from_table(source, &table, options))
}
