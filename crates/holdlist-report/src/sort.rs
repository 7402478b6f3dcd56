// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sort engine — partitions entries by audience, orders them in shelf order,
// and groups them into headed sections ready for layout.
//
// Sort keys, in precedence order:
//   1. shelf bucket (non-fiction, fiction, graphic fiction, other)
//   2. item type
//   3. shelved sequence (blank first)
// Collation ties on 2 and 3 break on the exact text, so entries sharing a
// section key stay adjacent.
//   4. shelfmark, author, barcode
//   5. position in the report

use std::borrow::Cow;
use std::cmp::Ordering;

use tracing::{debug, info, instrument, warn};

use holdlist_core::types::{
    Audience, Entry, ParseResult, RenderBlock, RenderDocument, RenderLine, SortResult, TextStyle,
};

use crate::classify::{ShelfBucket, normalize_sequence, shelf_bucket};
use crate::collate::collate;
use crate::entry_lines::entry_render_lines;

/// An entry with its derived sort keys.
#[derive(Debug, Clone)]
pub struct SortedEntry<'a> {
    pub entry: &'a Entry,
    pub bucket: ShelfBucket,
    /// Sequence after the shelving remap.
    pub sequence: Cow<'a, str>,
}

impl<'a> SortedEntry<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self {
            entry,
            bucket: shelf_bucket(&entry.item_type),
            sequence: normalize_sequence(&entry.item_type, &entry.sequence),
        }
    }

    /// The (item type, shelved sequence) pair that defines a section.
    fn section_key(&self) -> (&str, &str) {
        (self.entry.item_type.as_str(), &*self.sequence)
    }
}

/// Shelf-order comparison of two keyed entries.
pub fn compare_entries(a: &SortedEntry<'_>, b: &SortedEntry<'_>) -> Ordering {
    a.bucket
        .cmp(&b.bucket)
        .then_with(|| collate(&a.entry.item_type, &b.entry.item_type))
        .then_with(|| a.entry.item_type.cmp(&b.entry.item_type))
        .then_with(|| compare_sequences(&a.sequence, &b.sequence))
        .then_with(|| a.sequence.cmp(&b.sequence))
        .then_with(|| collate(&a.entry.shelfmark, &b.entry.shelfmark))
        .then_with(|| collate(&a.entry.author, &b.entry.author))
        .then_with(|| collate(&a.entry.barcode, &b.entry.barcode))
        .then_with(|| a.entry.original_index.cmp(&b.entry.original_index))
}

fn compare_sequences(a: &str, b: &str) -> Ordering {
    match (a.trim().is_empty(), b.trim().is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => collate(a, b),
    }
}

/// Entries of one audience in shelf order.
pub fn sorted_entries(entries: &[Entry], audience: Audience) -> Vec<SortedEntry<'_>> {
    let mut keyed: Vec<SortedEntry<'_>> = entries
        .iter()
        .filter(|e| e.audience == audience)
        .map(SortedEntry::new)
        .collect();
    keyed.sort_by(compare_entries);
    keyed
}

/// Partition, order and group a parsed report.
#[instrument(skip(parsed), fields(entries = parsed.entries.len()))]
pub fn sort_report(parsed: &ParseResult) -> SortResult {
    let adult = sorted_entries(&parsed.entries, Audience::Adult);
    let junior = sorted_entries(&parsed.entries, Audience::Junior);

    let is_valid = partition_is_complete(&parsed.entries, &adult, &junior);
    if !is_valid {
        warn!(
            original = parsed.entries.len(),
            adult = adult.len(),
            junior = junior.len(),
            "Audience partition does not reproduce the report"
        );
    }

    let result = SortResult {
        original_count: parsed.entries.len(),
        adult_count: adult.len(),
        junior_count: junior.len(),
        is_valid,
        adult: build_document(document_title(Audience::Adult, parsed), &adult),
        junior: build_document(document_title(Audience::Junior, parsed), &junior),
    };

    info!(
        adult = result.adult_count,
        junior = result.junior_count,
        valid = result.is_valid,
        "Report sorted"
    );
    result
}

/// Title printed at the top of every page of an audience's list.
pub fn document_title(audience: Audience, parsed: &ParseResult) -> String {
    format!(
        "{} reservation list — {} — {}",
        audience.label(),
        parsed.library_name,
        parsed.report_date
    )
}

/// Both partitions together hold every original entry exactly once.
pub fn partition_is_complete(
    entries: &[Entry],
    adult: &[SortedEntry<'_>],
    junior: &[SortedEntry<'_>],
) -> bool {
    let mut seen: Vec<usize> = adult
        .iter()
        .chain(junior)
        .map(|s| s.entry.original_index)
        .collect();
    seen.sort_unstable();

    let mut expected: Vec<usize> = entries.iter().map(|e| e.original_index).collect();
    expected.sort_unstable();

    seen == expected
}

/// Section heading text for an (item type, shelved sequence) pair.
pub fn heading_text(item_type: &str, sequence: &str) -> String {
    if sequence.trim().is_empty() {
        format!("{item_type} —")
    } else {
        format!("{item_type} — {sequence}")
    }
}

/// Group ordered entries into headed blocks.
///
/// A section's heading travels in the same block as its first entry so it can
/// never be stranded at the bottom of a column; later entries are blocks of
/// their own that remember the heading for continuation.
pub fn build_document(title: String, sorted: &[SortedEntry<'_>]) -> RenderDocument {
    let mut blocks: Vec<RenderBlock> = Vec::with_capacity(sorted.len());
    let mut current: Option<(RenderLine, (&str, &str))> = None;

    for keyed in sorted {
        let key = keyed.section_key();
        let mut lines = Vec::new();

        let starts_section = current.as_ref().is_none_or(|(_, prev)| *prev != key);
        if starts_section {
            let heading = RenderLine::styled(heading_text(key.0, key.1), TextStyle::Bold);
            debug!(heading = %heading.text(), "Section starts");
            lines.push(heading.clone());
            lines.push(RenderLine::blank());
            current = Some((heading, key));
        }

        lines.extend(entry_render_lines(keyed.entry));
        lines.push(RenderLine::blank());

        blocks.push(RenderBlock {
            lines,
            heading: current.as_ref().map(|(h, _)| h.clone()),
            has_heading: starts_section,
        });
    }

    trim_trailing_blanks(&mut blocks);
    RenderDocument { title, blocks }
}

fn trim_trailing_blanks(blocks: &mut Vec<RenderBlock>) {
    while let Some(last) = blocks.last_mut() {
        while last.lines.last().is_some_and(RenderLine::is_blank) {
            last.lines.pop();
        }
        if !last.lines.is_empty() {
            break;
        }
        blocks.pop();
    }
}
