// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text measurement for the PDF Base-14 fonts.
//
// Widths are the standard Adobe AFM advance widths in 1/1000 em for printable
// ASCII. Oblique Helvetica shares the upright widths; Courier is monospaced.

use holdlist_core::config::FontFamily;
use holdlist_core::types::TextStyle;

/// Measures rendered text width. The layout engine wraps and aligns with it.
pub trait TextMeasure {
    /// Width in points of `text` drawn in `style` at `size` points.
    fn text_width(&self, text: &str, style: TextStyle, size: f32) -> f32;
}

/// AFM-based metrics for one Base-14 family.
#[derive(Debug, Clone, Copy)]
pub struct Base14Metrics {
    family: FontFamily,
}

impl Base14Metrics {
    pub fn new(family: FontFamily) -> Self {
        Self { family }
    }

    /// Advance width of one character in 1/1000 em.
    fn char_units(&self, c: char, style: TextStyle) -> u16 {
        let table = match (self.family, style) {
            (FontFamily::Courier, _) => return 600,
            (FontFamily::Helvetica, TextStyle::Bold) => &HELVETICA_BOLD,
            (FontFamily::Helvetica, _) => &HELVETICA,
            (FontFamily::Times, TextStyle::Normal) => &TIMES_ROMAN,
            (FontFamily::Times, TextStyle::Bold) => &TIMES_BOLD,
            (FontFamily::Times, TextStyle::Italic) => &TIMES_ITALIC,
        };

        match c {
            ' '..='~' => table[c as usize - 32],
            '\u{2014}' => 1000,
            '\u{2013}' => table[b'-' as usize - 32].max(500),
            '\u{2018}' | '\u{2019}' => table[b',' as usize - 32],
            // Accented and other Latin letters: roughly an average lowercase glyph.
            _ => table[b'n' as usize - 32],
        }
    }
}

impl TextMeasure for Base14Metrics {
    fn text_width(&self, text: &str, style: TextStyle, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_units(c, style))).sum();
        units as f32 * size / 1000.0
    }
}

// -- Width tables: index = code point − 32, covering ' ' ..= '~' -------------

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 675, 675, 675, 500, 920,
    611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833,
    667, 722, 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556,
    389, 278, 389, 422, 500, 333,
    500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722,
    500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389,
    400, 275, 400, 541,
];
