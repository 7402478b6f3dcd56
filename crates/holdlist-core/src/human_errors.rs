// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for library staff.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how the front end presents it.

use crate::error::HoldlistError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The pasted or loaded report needs fixing.
    BadInput,
    /// The user must re-run a step (sort again, change settings).
    ActionRequired,
    /// Output was refused to protect the list's correctness.
    Blocked,
    /// Something outside the report went wrong (disk, PDF backend).
    System,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `HoldlistError` into a `HumanError` for display.
pub fn humanize_error(err: &HoldlistError) -> HumanError {
    match err {
        // -- Input --
        HoldlistError::EmptyInput => HumanError {
            message: "There is no report to sort.".into(),
            suggestion: "Paste or load the \"items on reservation\" report text, then sort again."
                .into(),
            severity: Severity::BadInput,
        },

        HoldlistError::InputTooLarge { size, limit } => HumanError {
            message: "That report is too large.".into(),
            suggestion: format!(
                "The report is {size} bytes; the most accepted is {limit}. Check that the right file was chosen."
            ),
            severity: Severity::BadInput,
        },

        // -- Parse --
        HoldlistError::NoEntryLines | HoldlistError::NoEntries => HumanError {
            message: "No reservations were found in the report.".into(),
            suggestion: "Each hold should start with a line ending in its 30120… barcode. Check the whole report was copied.".into(),
            severity: Severity::BadInput,
        },

        HoldlistError::EntryCountMismatch { expected, parsed } => HumanError {
            message: "Some reservations could not be read.".into(),
            suggestion: format!(
                "The report has {expected} barcode lines but only {parsed} holds were recovered. Nothing was produced; check the report for damaged lines."
            ),
            severity: Severity::BadInput,
        },

        HoldlistError::MalformedEntryLine { line_number, .. } => HumanError {
            message: "A reservation line could not be read.".into(),
            suggestion: format!("Check line {line_number} of the report."),
            severity: Severity::BadInput,
        },

        // -- Sort --
        HoldlistError::PartitionMismatch {
            original,
            adult,
            junior,
        } => HumanError {
            message: "Integrity check failed.".into(),
            suggestion: format!(
                "{original} holds were read but the lists hold {adult} adult and {junior} junior. Downloads are disabled; please report this report."
            ),
            severity: Severity::Blocked,
        },

        HoldlistError::NotSorted => HumanError {
            message: "The report hasn't been sorted yet.".into(),
            suggestion: "Sort the report first, then download the lists.".into(),
            severity: Severity::ActionRequired,
        },

        HoldlistError::StaleResult => HumanError {
            message: "The lists are out of date.".into(),
            suggestion: "The report or the layout settings changed. Sort again before downloading."
                .into(),
            severity: Severity::ActionRequired,
        },

        // -- Render --
        HoldlistError::LineLimitExceeded { count, limit } => HumanError {
            message: "This list is too long to print.".into(),
            suggestion: format!(
                "It needs {count} lines; the limit is {limit}. Try a smaller text size or two columns, or split the report."
            ),
            severity: Severity::Blocked,
        },

        HoldlistError::PageLimitExceeded { count, limit } => HumanError {
            message: "This list has too many pages.".into(),
            suggestion: format!(
                "It needs {count} pages; the limit is {limit}. Try a smaller text size or two columns."
            ),
            severity: Severity::Blocked,
        },

        HoldlistError::InvalidLayout(detail) => HumanError {
            message: "Those layout settings can't be used.".into(),
            suggestion: format!("Choose another setting. ({detail})"),
            severity: Severity::ActionRequired,
        },

        // -- Storage --
        HoldlistError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again."
                        .into(),
                    severity: Severity::BadInput,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Permission was denied.".into(),
                    suggestion:
                        "Check the file and folder permissions, or choose a different output folder."
                            .into(),
                    severity: Severity::System,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, the disk may be full.".into(),
                    severity: Severity::System,
                }
            }
        }

        HoldlistError::Serialization(_) => HumanError {
            message: "The settings file could not be written.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            severity: Severity::System,
        },
    }
}
