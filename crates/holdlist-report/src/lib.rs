// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// holdlist-report — Reservation report processing for Holdlist.
//
// Takes the raw "items on reservation" report text through input checks,
// parsing, shelving classification and sorting, producing one grouped
// document per audience.

pub mod classify;
pub mod collate;
pub mod entry_lines;
pub mod input;
pub mod parser;
pub mod sort;

use holdlist_core::error::Result;
use holdlist_core::types::{ParseResult, SortResult};

pub use input::validate_input;
pub use parser::parse_report;
pub use sort::sort_report;

/// Check, parse and sort a report in one step.
pub fn process_report(text: &str) -> Result<(ParseResult, SortResult)> {
    validate_input(text)?;
    let parsed = parse_report(text)?;
    let sorted = sort_report(&parsed);
    Ok((parsed, sorted))
}
