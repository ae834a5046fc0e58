//! Slash-command text parsing and response formatting
//!
//! The command text is a flat list of whitespace-separated `key=value`
//! tokens. Parsing is an explicit tokenizer into a map of floats with
//! per-token error reporting - a malformed token or non-numeric value is
//! an error, never silently skipped.

use hofstadter_domain::{EstimateInput, EstimateResult};
use std::collections::HashMap;
use thiserror::Error;

/// Static usage description returned for empty or `help` input
pub const HELP_TEXT: &str = "*Delay Estimator Help*\n\
    Estimate contextual delays for research tasks using 5 parameters.\n\n\
    *Usage:*\n\
    `/delay-estimator best_case_weeks=2 fraction_RD=0.8 hpc_factor=1 num_coauthors=1 stress_level=1`\n\n\
    *Parameters:*\n\
    - `best_case_weeks`: Minimum possible time required, in weeks (e.g. 2)\n\
    - `fraction_RD`: Fraction of task that is R&D (0 to 1)\n\
    - `hpc_factor`: 0 = no HPC, 1 = average reliability, >1 = worse than average\n\
    - `num_coauthors`: Number of coauthors who must weigh in (excluding PI)\n\
    - `stress_level`: 0.5 = rested, 1 = typical, >1 = depleted\n";

/// Errors raised while parsing the command text
#[derive(Debug, Error)]
pub enum CommandError {
    /// A required parameter was not supplied
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A token did not have the key=value shape
    #[error("malformed token {0:?} (expected key=value)")]
    MalformedToken(String),

    /// A value did not parse as a number
    #[error("invalid number {value:?} for {key}")]
    InvalidNumber {
        /// The key whose value failed to parse
        key: String,
        /// The raw value text
        value: String,
    },
}

/// Check whether the command text asks for the help message
///
/// Empty (or whitespace-only) text and the literal word `help` in any case
/// both count.
pub fn is_help(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("help")
}

/// Parse command text into estimator input
///
/// Tokens populate a map of parsed floats; a repeated key keeps the last
/// value, and keys beyond the required five are parsed but unused. The
/// required keys are case-sensitive.
pub fn parse_command(text: &str) -> Result<EstimateInput, CommandError> {
    let mut params: HashMap<String, f64> = HashMap::new();

    for token in text.split_whitespace() {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| CommandError::MalformedToken(token.to_string()))?;
        if key.is_empty() {
            return Err(CommandError::MalformedToken(token.to_string()));
        }

        let number: f64 = value.parse().map_err(|_| CommandError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        params.insert(key.to_string(), number);
    }

    Ok(EstimateInput::new(
        require(&params, "best_case_weeks")?,
        require(&params, "fraction_RD")?,
        require(&params, "hpc_factor")?,
        require(&params, "num_coauthors")?,
        require(&params, "stress_level")?,
    ))
}

/// Look up a required key in the parsed parameter map
fn require(params: &HashMap<String, f64>, key: &'static str) -> Result<f64, CommandError> {
    params
        .get(key)
        .copied()
        .ok_or(CommandError::MissingParameter(key))
}

/// Format an estimate as the success message
///
/// Three lines (mode, lower bound, upper bound), each value shown with one
/// decimal place and suffixed "weeks".
pub fn format_estimate(result: &EstimateResult) -> String {
    format!(
        "⏲️ *Estimated Time to Completion:*\n\
         - Mode (most likely): {:.1} weeks\n\
         - Lower Bound: {:.1} weeks\n\
         - Upper Bound: {:.1} weeks",
        result.mode, result.lower, result.upper
    )
}
