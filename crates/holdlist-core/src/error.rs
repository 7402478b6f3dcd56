// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Holdlist.

use thiserror::Error;

/// Top-level error type for all Holdlist operations.
#[derive(Debug, Error)]
pub enum HoldlistError {
    // -- Input errors --
    #[error("the report is empty")]
    EmptyInput,

    #[error("the report is {size} bytes, exceeding the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    // -- Parse errors --
    #[error("no reservation entries found: no line ends in a 30120… barcode")]
    NoEntryLines,

    #[error("the report produced zero entries")]
    NoEntries,

    #[error(
        "entry count mismatch: found {expected} barcode lines but parsed {parsed} entries ({} short)",
        shortfall(.expected, .parsed)
    )]
    EntryCountMismatch { expected: usize, parsed: usize },

    #[error("could not split barcode from entry line {line_number}: {line:?}")]
    MalformedEntryLine { line_number: usize, line: String },

    // -- Sort errors --
    #[error(
        "integrity check failed: {original} entries in report but {adult} adult + {junior} junior"
    )]
    PartitionMismatch {
        original: usize,
        adult: usize,
        junior: usize,
    },

    #[error("nothing has been sorted yet")]
    NotSorted,

    #[error("the report or layout changed since the last sort")]
    StaleResult,

    // -- Render errors --
    #[error("document has {count} wrapped lines, exceeding the limit of {limit}")]
    LineLimitExceeded { count: usize, limit: usize },

    #[error("document needs {count} pages, exceeding the limit of {limit}")]
    PageLimitExceeded { count: usize, limit: usize },

    #[error("invalid layout setting: {0}")]
    InvalidLayout(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn shortfall(expected: &usize, parsed: &usize) -> usize {
    expected.saturating_sub(*parsed)
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, HoldlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_cites_counts_and_shortfall() {
        let err = HoldlistError::EntryCountMismatch {
            expected: 12,
            parsed: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("9 entries"));
        assert!(msg.contains("3 short"));
    }

    #[test]
    fn limit_messages_quote_the_limit() {
        let err = HoldlistError::LineLimitExceeded {
            count: 12_001,
            limit: 12_000,
        };
        assert!(err.to_string().contains("12000"));
    }
}
