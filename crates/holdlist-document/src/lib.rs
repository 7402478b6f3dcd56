// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// holdlist-document — Layout and PDF output for Holdlist.
//
// Wraps render lines against Base-14 font metrics, flows blocks into one or two
// columns per page with continuation headings and page footers, and renders
// the result to PDF through printpdf.

pub mod layout;
pub mod metrics;
pub mod pdf;

// Re-export the primary structs so callers can use `holdlist_document::PdfWriter` etc.
pub use layout::{DocumentLayout, Paginator};
pub use metrics::{Base14Metrics, TextMeasure};
pub use pdf::PdfWriter;
