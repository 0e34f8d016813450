//! Lexer comparison results
//!
//! The lexer test harness writes one record per token, comparing what was
//! expected with what the lexer returned. This module reads those records
//! and summarizes them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;

/// Comparison outcome for one token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "DIFF")]
    Diff,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One compared token
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenResult {
    pub index: Option<usize>,
    pub expected_type: String,
    pub expected_value: String,
    pub returned_type: String,
    pub returned_value: String,
    pub line: usize,
    pub column: usize,
    pub status: Status,
}

/// Pass/diff counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResultSummary {
    pub pass: usize,
    pub diff: usize,
}

/// Parse a results document
///
/// A document that is not an array holds no results; entries that do not
/// fit the record shape are skipped.
pub fn parse_results(json: &str) -> Result<Vec<TokenResult>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    let mut results = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<TokenResult>(item) {
            Ok(result) => results.push(result),
            Err(e) => warn!(position, error = %e, "skipping malformed result"),
        }
    }
    Ok(results)
}

/// Count passing and differing tokens
pub fn summarize(results: &[TokenResult]) -> ResultSummary {
    results.iter().fold(ResultSummary::default(), |mut acc, r| {
        match r.status {
            Status::Ok => acc.pass += 1,
            Status::Diff => acc.diff += 1,
            Status::Unknown => {}
        }
        acc
    })
}

/// Only the tokens whose lexer output differed
pub fn diffs_only(results: &[TokenResult]) -> impl Iterator<Item = &TokenResult> {
    results.iter().filter(|r| r.status == Status::Diff)
}
