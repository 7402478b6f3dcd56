// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: parsed reservation entries and the render model handed
// from the sort engine to the layout engine.

use serde::{Deserialize, Serialize};

/// Placeholder used when the report header has no `Items at …` line.
pub const UNKNOWN_LIBRARY: &str = "Unknown Library";

/// Placeholder used when the report header has no `res_itm_noloan …` line.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Which pick list an entry belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    Adult,
    Junior,
}

impl Audience {
    /// Capitalised label used in document titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Junior => "Junior",
        }
    }

    /// Output file stem ("adult list", "junior list").
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Adult => "adult list",
            Self::Junior => "junior list",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One reservation hold recovered from the report.
///
/// Entries are built once by the parser and never mutated afterwards; the sort
/// engine only reorders references to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Original report lines for this record, in order, blank lines included.
    pub raw_lines: Vec<String>,
    pub barcode: String,
    pub shelfmark: String,
    pub author: String,
    pub item_type: String,
    pub sequence: String,
    pub audience: Audience,
    /// Position in the source report; the last sort tie-break.
    pub original_index: usize,
}

/// Parser output: header metadata plus entries in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub library_name: String,
    pub report_date: String,
    pub entries: Vec<Entry>,
}

/// Font style of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// A run of text drawn in a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub style: TextStyle,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::Normal)
    }
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderLine {
    /// Left-aligned runs, drawn one after another.
    pub segments: Vec<Segment>,
    /// Right-aligned trailing field (the barcode on an entry's first line).
    pub right: Option<Segment>,
    /// Wrapped remainder of a longer line; drawn with a hanging indent.
    pub continuation: bool,
}

impl RenderLine {
    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A single-run line in the given style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            segments: vec![Segment::new(text, style)],
            right: None,
            continuation: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::Normal)
    }

    pub fn with_right(mut self, right: Segment) -> Self {
        self.right = Some(right);
        self
    }

    /// True when nothing visible would be drawn.
    pub fn is_blank(&self) -> bool {
        self.right.is_none() && self.segments.iter().all(|s| s.text.trim().is_empty())
    }

    /// The left-hand text with styles dropped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One atomic layout unit: kept together in a column whenever it fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBlock {
    pub lines: Vec<RenderLine>,
    /// Heading of the section this block belongs to, re-emitted as
    /// "<heading> (cont.)" when the block lands at the top of a new column.
    pub heading: Option<RenderLine>,
    /// Whether `lines` starts with a fresh section heading.
    pub has_heading: bool,
}

/// One complete audience-specific output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDocument {
    pub title: String,
    pub blocks: Vec<RenderBlock>,
}

impl RenderDocument {
    /// Number of unwrapped lines across all blocks.
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(|b| b.lines.len()).sum()
    }

    /// Section headings in document order.
    pub fn headings(&self) -> impl Iterator<Item = &RenderLine> {
        self.blocks
            .iter()
            .filter(|b| b.has_heading)
            .filter_map(|b| b.heading.as_ref())
    }
}

/// Sort engine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResult {
    pub original_count: usize,
    pub adult_count: usize,
    pub junior_count: usize,
    /// Adult and junior partitions together reproduce the original entries.
    pub is_valid: bool,
    pub adult: RenderDocument,
    pub junior: RenderDocument,
}

impl SortResult {
    pub fn document(&self, audience: Audience) -> &RenderDocument {
        match audience {
            Audience::Adult => &self.adult,
            Audience::Junior => &self.junior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_detection() {
        assert!(RenderLine::blank().is_blank());
        assert!(RenderLine::plain("   ").is_blank());
        assert!(!RenderLine::plain("x").is_blank());
        assert!(!RenderLine::blank().with_right(Segment::normal("30120")).is_blank());
    }

    #[test]
    fn headings_only_come_from_heading_blocks() {
        let heading = RenderLine::styled("Adult Fiction —", TextStyle::Bold);
        let doc = RenderDocument {
            title: "t".into(),
            blocks: vec![
                RenderBlock {
                    lines: vec![heading.clone(), RenderLine::blank()],
                    heading: Some(heading.clone()),
                    has_heading: true,
                },
                RenderBlock {
                    lines: vec![RenderLine::plain("entry")],
                    heading: Some(heading.clone()),
                    has_heading: false,
                },
            ],
        };
        assert_eq!(doc.headings().count(), 1);
        assert_eq!(doc.line_count(), 3);
    }
}
