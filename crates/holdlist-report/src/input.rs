// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Up-front checks on raw report text, run before any parsing state exists.

use holdlist_core::config::MAX_INPUT_BYTES;
use holdlist_core::error::{HoldlistError, Result};

/// Reject empty, whitespace-only, or oversized report text.
pub fn validate_input(text: &str) -> Result<()> {
    validate_input_with_limit(text, MAX_INPUT_BYTES)
}

pub(crate) fn validate_input_with_limit(text: &str, limit: usize) -> Result<()> {
    if text.len() > limit {
        return Err(HoldlistError::InputTooLarge {
            size: text.len(),
            limit,
        });
    }
    if text.trim().is_empty() {
        return Err(HoldlistError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_empty() {
        assert!(matches!(
            validate_input(" \n\t\r\n"),
            Err(HoldlistError::EmptyInput)
        ));
    }

    #[test]
    fn oversized_input_is_rejected_before_content_checks() {
        let text = " ".repeat(11);
        match validate_input_with_limit(&text, 10) {
            Err(HoldlistError::InputTooLarge { size, limit }) => {
                assert_eq!(size, 11);
                assert_eq!(limit, 10);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn ordinary_text_passes() {
        assert!(validate_input("Items at Springfield Library").is_ok());
    }
}
