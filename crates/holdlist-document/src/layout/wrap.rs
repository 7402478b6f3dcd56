// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Word wrapping of styled render lines against measured font widths.

use holdlist_core::types::{RenderLine, Segment, TextStyle};

use crate::metrics::TextMeasure;

/// Wraps render lines to a column width.
///
/// The first output line uses the full width; continuation lines lose the
/// hanging indent. A line carrying a right-aligned field wraps its left text
/// into the space left after reserving room for that field, and the field
/// stays on the last wrapped line.
pub struct LineWrapper<'a> {
    measure: &'a dyn TextMeasure,
    font_size: f32,
    indent: f32,
    max_right: f32,
    right_gap: f32,
}

impl<'a> LineWrapper<'a> {
    pub fn new(measure: &'a dyn TextMeasure, font_size: f32) -> Self {
        Self {
            measure,
            font_size,
            indent: 0.0,
            max_right: f32::INFINITY,
            right_gap: 0.0,
        }
    }

    /// Hanging indent for continuation lines, in points.
    pub fn with_indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    /// Cap on the width reserved for a right field, plus the gap kept between
    /// it and the left text.
    pub fn with_right_field(mut self, max_width: f32, gap: f32) -> Self {
        self.max_right = max_width;
        self.right_gap = gap;
        self
    }

    pub fn indent(&self) -> f32 {
        self.indent
    }

    pub fn width(&self, text: &str, style: TextStyle) -> f32 {
        self.measure.text_width(text, style, self.font_size)
    }

    /// Width held back from the left text for a right field.
    pub fn right_reserve(&self, right: &Segment) -> f32 {
        self.width(&right.text, right.style).min(self.max_right) + self.right_gap
    }

    /// Wrap one line to `width` points.
    pub fn wrap(&self, line: &RenderLine, width: f32) -> Vec<RenderLine> {
        let left_width = match &line.right {
            Some(right) => (width - self.right_reserve(right)).max(self.font_size),
            None => width,
        };

        let runs = self.wrap_segments(&line.segments, left_width);
        if runs.is_empty() {
            return vec![RenderLine {
                segments: Vec::new(),
                right: line.right.clone(),
                continuation: line.continuation,
            }];
        }

        let last = runs.len() - 1;
        runs.into_iter()
            .enumerate()
            .map(|(i, segments)| RenderLine {
                segments,
                right: if i == last { line.right.clone() } else { None },
                continuation: line.continuation || i > 0,
            })
            .collect()
    }

    fn limit(&self, width: f32, lines_so_far: usize) -> f32 {
        if lines_so_far == 0 {
            width
        } else {
            (width - self.indent).max(self.font_size)
        }
    }

    /// Greedy fill. Words wider than a whole line are broken by character.
    fn wrap_segments(&self, segments: &[Segment], width: f32) -> Vec<Vec<Segment>> {
        let mut lines: Vec<Vec<Segment>> = Vec::new();
        let mut current: Vec<Segment> = Vec::new();
        let mut used = 0.0;

        let words = segments
            .iter()
            .flat_map(|s| s.text.split_whitespace().map(move |w| (w, s.style)));

        for (word, style) in words {
            let word_w = self.width(word, style);

            if !current.is_empty() {
                let space_w = self.width(" ", style);
                if used + space_w + word_w <= self.limit(width, lines.len()) {
                    push_run(&mut current, " ", style);
                    push_run(&mut current, word, style);
                    used += space_w + word_w;
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            let mut rest = word;
            loop {
                let limit = self.limit(width, lines.len());
                let rest_w = self.width(rest, style);
                if rest_w <= limit {
                    push_run(&mut current, rest, style);
                    used = rest_w;
                    break;
                }
                let split = self.fit_prefix(rest, style, limit);
                push_run(&mut current, &rest[..split], style);
                lines.push(std::mem::take(&mut current));
                rest = &rest[split..];
                if rest.is_empty() {
                    used = 0.0;
                    break;
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Byte length of the longest prefix of `text` that fits in `limit`.
    /// Always at least one character.
    fn fit_prefix(&self, text: &str, style: TextStyle, limit: f32) -> usize {
        let mut used = 0.0;
        let mut end = 0;
        let mut buf = [0u8; 4];
        for (i, c) in text.char_indices() {
            let w = self.width(c.encode_utf8(&mut buf), style);
            if used + w > limit && i > 0 {
                break;
            }
            used += w;
            end = i + c.len_utf8();
        }
        end
    }
}

/// Append text to the last run when the style matches, else start a new run.
fn push_run(runs: &mut Vec<Segment>, text: &str, style: TextStyle) {
    match runs.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => runs.push(Segment::new(text, style)),
    }
}
