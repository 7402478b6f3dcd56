// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drawing surface abstraction between layout and the PDF backend.

use crate::layout::{DocumentLayout, PlacedText};

/// Something a laid-out document can be drawn onto.
pub trait DrawSurface {
    /// Start a fresh page; later text goes onto it.
    fn begin_page(&mut self);

    /// Draw one positioned run on the current page.
    fn draw_text(&mut self, item: &PlacedText);

    fn page_count(&self) -> usize;
}

/// Replay a layout onto a surface, page by page.
pub fn render_layout<S: DrawSurface + ?Sized>(layout: &DocumentLayout, surface: &mut S) {
    for page in &layout.pages {
        surface.begin_page();
        for item in &page.items {
            surface.draw_text(item);
        }
    }
}
