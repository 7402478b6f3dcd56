// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shelving policy: audience, type bucket and sequence normalisation.
//
// These rules encode how the branch shelves stock. They are deliberately
// conservative: anything not recognisably junior goes on the adult list.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use holdlist_core::types::Audience;

static DVD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdvd\b").expect("valid dvd regex"));

/// Coarse shelf category, in pick order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShelfBucket {
    NonFiction = 0,
    Fiction = 1,
    GraphicFiction = 2,
    /// DVDs, audiobooks, and anything unrecognised.
    Other = 3,
}

/// Decide which list an entry belongs on.
pub fn classify_audience(item_type: &str, sequence: &str) -> Audience {
    let item_type = item_type.trim().to_lowercase();
    let sequence = sequence.to_lowercase();

    if item_type.starts_with("adult") {
        Audience::Adult
    } else if item_type.starts_with("junior") {
        Audience::Junior
    } else if item_type.contains("children") || sequence.contains("children") {
        Audience::Junior
    } else {
        Audience::Adult
    }
}

/// Primary sort key for an item type.
pub fn shelf_bucket(item_type: &str) -> ShelfBucket {
    if DVD_WORD.is_match(item_type) {
        return ShelfBucket::Other;
    }

    let lower = item_type.trim().to_lowercase();
    let after_audience = lower
        .strip_prefix("adult ")
        .or_else(|| lower.strip_prefix("junior "));

    match after_audience {
        Some(rest) if rest.starts_with("non-fiction") => ShelfBucket::NonFiction,
        Some(rest) if rest.starts_with("fiction") => ShelfBucket::Fiction,
        _ if lower.contains("graphic fiction") => ShelfBucket::GraphicFiction,
        _ => ShelfBucket::Other,
    }
}

/// Sequence as it is shelved.
///
/// Adult fiction folds several genre sequences into the general run and files
/// thrillers with crime; every other item type keeps its sequence unchanged.
pub fn normalize_sequence<'a>(item_type: &str, sequence: &'a str) -> Cow<'a, str> {
    if !item_type.trim().eq_ignore_ascii_case("adult fiction") {
        return Cow::Borrowed(sequence);
    }

    match sequence.trim().to_lowercase().as_str() {
        "thriller" => Cow::Borrowed("Crime"),
        "historical" | "romance" | "saga" | "horror" | "western" => Cow::Borrowed(""),
        _ => Cow::Borrowed(sequence),
    }
}
