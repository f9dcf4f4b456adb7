// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod options;
pub mod processor;
pub mod report;
pub mod token;
pub mod tokenizer;

use crate::config::{Config, InputSource};
use crate::error::{EngineError, Result};
use crate::report::Report;
use crate::tokenizer::Tokenizer;

pub const MERGED_SOURCE: &str = "<merged>";

/// Outcome of a run: every report produced plus the inputs that failed.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<Report>,
    pub errors: Vec<(String, EngineError)>,
}

/// Run the analysis with the tokenizer selected in `config`.
///
/// # Errors
///
/// In strict mode the first failing input aborts the run. Otherwise only
/// tokenizer construction can fail here; per-input errors are collected in
/// `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let tokenizer = tokenizer::build(config.tokenizer)?;
    run_with(config, tokenizer.as_ref())
}

/// Run the analysis with a caller-supplied tokenizer.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(config: &Config, tokenizer: &dyn Tokenizer) -> Result<RunResult> {
    if config.inputs.is_empty() {
        return Err(EngineError::Config("no inputs given".to_string()));
    }

    if config.merge {
        run_merged(config, tokenizer)
    } else {
        run_each(config, tokenizer)
    }
}

fn run_each(config: &Config, tokenizer: &dyn Tokenizer) -> Result<RunResult> {
    let mut result = RunResult::default();
    for input in &config.inputs {
        match processor::process_input(input, tokenizer, &config.analysis) {
            Ok(report) => result.reports.push(report),
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                let name = input.name();
                log::debug!("skipping {name}: {e}");
                result.errors.push((name, e));
            }
        }
    }
    Ok(result)
}

fn run_merged(config: &Config, tokenizer: &dyn Tokenizer) -> Result<RunResult> {
    let mut result = RunResult::default();
    let mut stream = Vec::new();
    let mut loaded = 0usize;
    for input in &config.inputs {
        match processor::load_tokens(input, tokenizer, &config.analysis) {
            Ok(tokens) => {
                log::debug!("{}: {} tokens merged", input.name(), tokens.len());
                stream.extend(tokens);
                loaded += 1;
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                log::debug!("skipping {}: {e}", input.name());
                result.errors.push((input.name(), e));
            }
        }
    }

    // nothing was read, so a zero report would misstate the inputs
    if loaded == 0 {
        return Ok(result);
    }

    match processor::process_tokens(MERGED_SOURCE, &stream, &config.analysis) {
        Ok(report) => result.reports.push(report),
        Err(e) if config.strict => return Err(e),
        Err(e) => result.errors.push((MERGED_SOURCE.to_string(), e)),
    }
    Ok(result)
}
