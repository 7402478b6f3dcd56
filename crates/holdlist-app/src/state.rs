// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session state — the report text, the layout in force, and the last sort.
//
// A cached sort is only good for the exact input and layout it was made
// under: changing either drops it, and export re-checks the fingerprint.

use chrono::{DateTime, Utc};
use holdlist_core::LayoutConfig;
use holdlist_core::error::{HoldlistError, Result};
use holdlist_core::fingerprint::{run_fingerprint, verify_fingerprint};
use holdlist_core::types::{Audience, ParseResult, SortResult};
use holdlist_document::PdfWriter;
use holdlist_report::process_report;
use tracing::{debug, info, warn};

/// A successful sort and what it was computed from.
#[derive(Debug, Clone)]
pub struct CachedSort {
    pub parsed: ParseResult,
    pub result: SortResult,
    pub fingerprint: String,
    pub sorted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    input: String,
    layout: LayoutConfig,
    cached: Option<CachedSort>,
}

impl AppState {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn cached(&self) -> Option<&CachedSort> {
        self.cached.as_ref()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.input {
            self.input = text;
            self.invalidate("input changed");
        }
    }

    pub fn set_layout(&mut self, layout: LayoutConfig) {
        if layout != self.layout {
            self.layout = layout;
            self.invalidate("layout changed");
        }
    }

    fn invalidate(&mut self, reason: &str) {
        if self.cached.take().is_some() {
            debug!(reason, "Cached sort is stale");
        }
    }

    /// Parse and sort the current input, replacing any cached result.
    /// On failure nothing stays cached.
    pub fn run_sort(&mut self) -> Result<&CachedSort> {
        self.cached = None;

        let (parsed, result) = process_report(&self.input)?;
        let fingerprint = run_fingerprint(&self.input, &self.layout)?;

        if result.is_valid {
            info!(
                total = result.original_count,
                adult = result.adult_count,
                junior = result.junior_count,
                "Report sorted"
            );
        } else {
            warn!(
                total = result.original_count,
                adult = result.adult_count,
                junior = result.junior_count,
                "Sorted partitions do not account for every entry"
            );
        }

        Ok(self.cached.insert(CachedSort {
            parsed,
            result,
            fingerprint,
            sorted_at: Utc::now(),
        }))
    }

    /// Render one audience's list from the cached sort.
    ///
    /// Refused when there is no sort, when the sort is stale, or when its
    /// partitions failed the integrity check.
    pub fn export(&self, audience: Audience) -> Result<Vec<u8>> {
        let cached = self.cached.as_ref().ok_or(HoldlistError::NotSorted)?;
        verify_fingerprint(&self.input, &self.layout, &cached.fingerprint)?;

        let result = &cached.result;
        if !result.is_valid {
            return Err(HoldlistError::PartitionMismatch {
                original: result.original_count,
                adult: result.adult_count,
                junior: result.junior_count,
            });
        }

        PdfWriter::new(self.layout.clone())?.render(result.document(audience))
    }
}
