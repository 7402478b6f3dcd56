// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Turn an entry's raw report lines into styled output lines.

use std::sync::LazyLock;

use regex::Regex;

use holdlist_core::types::{Entry, RenderLine, Segment, TextStyle};

use crate::parser::{ENTRY_START, METADATA_LINE};

static BARE_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*sequence\s*:\s*$").expect("valid bare sequence regex"));

/// Styled lines for one entry.
///
/// - blank raw lines are dropped;
/// - the barcode line becomes descriptive text plus a right-aligned barcode;
/// - the line just before the first metadata line is the title, in italics;
/// - an empty `Sequence :` line is left out.
pub fn entry_render_lines(entry: &Entry) -> Vec<RenderLine> {
    let kept: Vec<&str> = entry
        .raw_lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let Some((first, rest)) = kept.split_first() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(kept.len());
    lines.push(barcode_line(first));

    let title_index = rest
        .iter()
        .position(|l| METADATA_LINE.is_match(l))
        .and_then(|i| i.checked_sub(1));

    for (i, line) in rest.iter().enumerate() {
        if BARE_SEQUENCE.is_match(line) {
            continue;
        }
        let style = if Some(i) == title_index {
            TextStyle::Italic
        } else {
            TextStyle::Normal
        };
        lines.push(RenderLine::styled(*line, style));
    }

    lines
}

fn barcode_line(line: &str) -> RenderLine {
    match ENTRY_START.captures(line) {
        Some(caps) => {
            let descriptive = caps.get(1).map_or("", |m| m.as_str()).trim();
            RenderLine::plain(descriptive).with_right(Segment::normal(&caps[2]))
        }
        None => RenderLine::plain(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdlist_core::types::Audience;

    fn entry(raw: &[&str]) -> Entry {
        Entry {
            raw_lines: raw.iter().map(|s| s.to_string()).collect(),
            barcode: String::new(),
            shelfmark: String::new(),
            author: String::new(),
            item_type: String::new(),
            sequence: String::new(),
            audience: Audience::Adult,
            original_index: 0,
        }
    }

    #[test]
    fn full_record_is_styled() {
        let lines = entry_render_lines(&entry(&[
            "F SMI The lighthouse keeper   30120012345678",
            "",
            "  Smith, Jane",
            "The lighthouse keeper",
            "Item Type: Adult Fiction",
            "Sequence :",
            "Reserved at: Springfield",
            "",
        ]));

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].text(), "F SMI The lighthouse keeper");
        assert_eq!(
            lines[0].right,
            Some(Segment::normal("30120012345678"))
        );
        assert_eq!(lines[1].text(), "Smith, Jane");
        assert_eq!(lines[1].segments[0].style, TextStyle::Normal);
        assert_eq!(lines[2].segments[0].style, TextStyle::Italic);
        assert_eq!(lines[3].text(), "Item Type: Adult Fiction");
        assert_eq!(lines[4].text(), "Reserved at: Springfield");
    }

    #[test]
    fn metadata_straight_after_barcode_line_has_no_title() {
        let lines = entry_render_lines(&entry(&[
            "AF 30120000000001",
            "Item Type: Adult DVD",
        ]));
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.segments[0].style == TextStyle::Normal));
    }

    #[test]
    fn filled_sequence_line_is_kept() {
        let lines = entry_render_lines(&entry(&[
            "AF 30120000000001",
            "Author",
            "Title",
            "Sequence: Crime",
        ]));
        assert_eq!(lines.last().map(|l| l.text()), Some("Sequence: Crime".to_string()));
        assert_eq!(lines[2].segments[0].style, TextStyle::Italic);
    }
}
