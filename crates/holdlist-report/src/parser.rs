// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reservation report parser.
//
// The report is a fixed plain-text format: a few header lines, then one record
// per hold. A record starts on a line ending in a `30120…` barcode and runs
// until the next such line. Parsing is a two-state machine over the lines:
//
//   Header ──(first barcode line)──▶ Entry ──(next barcode line)──▶ Entry …
//
// Header metadata is only looked for while in `Header`. After parsing, the
// number of records is checked against an independent count of barcode lines
// so a record that swallowed its neighbour is caught instead of silently
// dropping a hold.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument};

use holdlist_core::error::{HoldlistError, Result};
use holdlist_core::types::{Entry, ParseResult, UNKNOWN_DATE, UNKNOWN_LIBRARY};

use crate::classify::classify_audience;

/// Descriptive text, whitespace, then the barcode at end of line.
pub(crate) static ENTRY_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s+(30120\d+)\s*$").expect("valid entry start regex")
});
static LIBRARY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Items at\s+(.+?)\s*$").expect("valid library name regex"));
static REPORT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bres_itm_noloan\s+(\d{2}/\d{2}/\d{2})\b").expect("valid report date regex")
});
static ITEM_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*item\s*type\s*:\s*(.*?)\s*$").expect("valid item type regex")
});
static SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*sequence\s*:\s*(.*?)\s*$").expect("valid sequence regex")
});
/// Any of the labelled metadata lines that follow the author/title.
pub(crate) static METADATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(item\s*type|sequence|reserved\s+at)\s*:").expect("valid metadata regex")
});

/// Parse a raw report into header metadata and entries.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_report(text: &str) -> Result<ParseResult> {
    let normalized = normalize_line_endings(text);

    let expected = count_entry_lines(&normalized);
    if expected == 0 {
        return Err(HoldlistError::NoEntryLines);
    }

    let mut machine = ReportMachine::default();
    for (idx, line) in normalized.split('\n').enumerate() {
        machine.feed(idx + 1, line);
    }
    let ReportMachine {
        library_name,
        report_date,
        records,
        ..
    } = machine.finish();

    let entries = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| build_entry(index, record))
        .collect::<Result<Vec<_>>>()?;

    if entries.is_empty() {
        return Err(HoldlistError::NoEntries);
    }
    // Records open on the same pattern the count uses, so this holds today;
    // it guards against the state machine drifting from the count.
    verify_entry_count(expected, entries.len())?;

    let result = ParseResult {
        library_name: library_name.unwrap_or_else(|| UNKNOWN_LIBRARY.to_string()),
        report_date: report_date.unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        entries,
    };

    info!(
        library = %result.library_name,
        date = %result.report_date,
        entries = result.entries.len(),
        "Report parsed"
    );
    Ok(result)
}

/// Whether `line` opens a new record.
pub fn is_entry_start(line: &str) -> bool {
    ENTRY_START.is_match(line)
}

/// Count every barcode line in the text, independently of the state machine.
pub fn count_entry_lines(text: &str) -> usize {
    text.split('\n').filter(|line| is_entry_start(line)).count()
}

/// Fail unless every barcode line produced exactly one entry.
pub fn verify_entry_count(expected: usize, parsed: usize) -> Result<()> {
    if expected == parsed {
        Ok(())
    } else {
        Err(HoldlistError::EntryCountMismatch { expected, parsed })
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

// -- State machine ------------------------------------------------------------

/// Lines of one record plus where it started (1-based).
#[derive(Debug)]
struct Record {
    start_line: usize,
    lines: Vec<String>,
}

#[derive(Debug, Default)]
enum ParseState {
    /// Before the first barcode line.
    #[default]
    Header,
    /// Accumulating the lines of the current record.
    Entry(Record),
}

#[derive(Debug, Default)]
struct ReportMachine {
    state: ParseState,
    library_name: Option<String>,
    report_date: Option<String>,
    records: Vec<Record>,
}

impl ReportMachine {
    fn feed(&mut self, line_number: usize, line: &str) {
        if is_entry_start(line) {
            let opened = Record {
                start_line: line_number,
                lines: vec![line.to_string()],
            };
            match std::mem::replace(&mut self.state, ParseState::Entry(opened)) {
                ParseState::Entry(done) => self.records.push(done),
                ParseState::Header => debug!(line_number, "Header region ends"),
            }
            return;
        }

        match &mut self.state {
            ParseState::Header => self.scan_header(line),
            ParseState::Entry(record) => record.lines.push(line.to_string()),
        }
    }

    fn scan_header(&mut self, line: &str) {
        if self.library_name.is_none()
            && let Some(caps) = LIBRARY_NAME.captures(line)
        {
            self.library_name = Some(caps[1].to_string());
        }
        if self.report_date.is_none()
            && let Some(caps) = REPORT_DATE.captures(line)
        {
            self.report_date = Some(caps[1].to_string());
        }
    }

    fn finish(mut self) -> Self {
        if let ParseState::Entry(last) = std::mem::take(&mut self.state) {
            self.records.push(last);
        }
        self
    }
}

// -- Record → Entry -----------------------------------------------------------

fn build_entry(original_index: usize, record: Record) -> Result<Entry> {
    let first = record.lines.first().map(String::as_str).unwrap_or_default();
    let caps = ENTRY_START
        .captures(first)
        .ok_or_else(|| HoldlistError::MalformedEntryLine {
            line_number: record.start_line,
            line: first.to_string(),
        })?;

    let descriptive = caps.get(1).map_or("", |m| m.as_str());
    let barcode = caps[2].to_string();
    let shelfmark = descriptive
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let author = record.lines[1..]
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty() && !METADATA_LINE.is_match(l) && !is_report_header(l))
        .unwrap_or_default()
        .to_string();

    let item_type = first_field(&record.lines, &ITEM_TYPE);
    let sequence = first_field(&record.lines, &SEQUENCE);
    let audience = classify_audience(&item_type, &sequence);

    Ok(Entry {
        raw_lines: record.lines,
        barcode,
        shelfmark,
        author,
        item_type,
        sequence,
        audience,
        original_index,
    })
}

/// Report furniture that can repeat inside a record at page breaks.
fn is_report_header(line: &str) -> bool {
    LIBRARY_NAME.is_match(line) || REPORT_DATE.is_match(line)
}

fn first_field(lines: &[String], pattern: &Regex) -> String {
    lines
        .iter()
        .find_map(|line| pattern.captures(line))
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}
