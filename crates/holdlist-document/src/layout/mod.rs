// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout module — wrapping render lines to column width and placing them on
// pages as positioned text runs.

pub mod paginate;
pub mod wrap;

use holdlist_core::types::TextStyle;

pub use paginate::Paginator;
pub use wrap::LineWrapper;

/// Horizontal anchoring of a placed run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A run of text at an absolute position on a page.
///
/// Coordinates are in points; `y` is the baseline measured down from the top
/// edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub style: TextStyle,
    pub size: f32,
    pub align: Align,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub items: Vec<PlacedText>,
}

/// A fully paginated document, ready to hand to a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub title: String,
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<PageContent>,
    /// Body lines after wrapping; continuation headings are not counted.
    pub wrapped_lines: usize,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every run on every page, paired with its page index.
    pub fn items(&self) -> impl Iterator<Item = (usize, &PlacedText)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.items.iter().map(move |t| (i, t)))
    }
}
