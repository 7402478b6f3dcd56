// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagination — flows wrapped blocks into columns and pages.
//
// Blocks are kept whole in a column when they fit (with a little slack at the
// bottom). A block that does not fit first loses its trailing spacer lines; if
// it still does not fit it moves to the next column. Blocks taller than a whole
// column flow line by line, but a section never opens unless its heading, the
// spacer and the first entry line fit together. Whenever a section carries on
// in a new column, the heading is repeated with a " (cont.)" suffix.

use holdlist_core::config::LayoutConfig;
use holdlist_core::error::{HoldlistError, Result};
use holdlist_core::types::{RenderBlock, RenderDocument, RenderLine, Segment, TextStyle};
use tracing::{debug, info, instrument, warn};

use super::wrap::LineWrapper;
use super::{Align, DocumentLayout, PageContent, PlacedText};
use crate::metrics::TextMeasure;

pub const CONTINUED_SUFFIX: &str = " (cont.)";

/// Lays out a [`RenderDocument`] under one [`LayoutConfig`].
pub struct Paginator<'a> {
    config: &'a LayoutConfig,
    measure: &'a dyn TextMeasure,
    page_width: f32,
    page_height: f32,
    margin: f32,
    column_width: f32,
    column_gap: f32,
    line_height: f32,
    slack: f32,
}

impl<'a> Paginator<'a> {
    pub fn new(config: &'a LayoutConfig, measure: &'a dyn TextMeasure) -> Result<Self> {
        config.validate()?;

        let g = &config.geometry;
        let (page_width, page_height) = g.page_size_pt();
        let margin = g.margin_pt();
        let column_gap = g.column_gap_pt();
        let columns = f32::from(config.columns);
        let column_width = (page_width - 2.0 * margin - column_gap * (columns - 1.0)) / columns;
        if column_width <= config.font_size * 4.0 {
            return Err(HoldlistError::InvalidLayout(format!(
                "columns are too narrow ({column_width:.1} pt)"
            )));
        }

        let line_height = config.line_height();
        Ok(Self {
            config,
            measure,
            page_width,
            page_height,
            margin,
            column_width,
            column_gap,
            line_height,
            slack: g.fit_slack_lines * line_height,
        })
    }

    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Left edge of a column, in points from the left of the page.
    pub fn column_left(&self, column: usize) -> f32 {
        self.margin + column as f32 * (self.column_width + self.column_gap)
    }

    /// Body lines that fit in one column under the given title.
    pub fn lines_per_column(&self, title: &str) -> usize {
        let (top, bottom) = self.content_bounds(self.title_lines(title).len());
        ((bottom + self.slack - top) / self.line_height).floor() as usize
    }

    fn body_wrapper(&self) -> LineWrapper<'a> {
        let g = &self.config.geometry;
        LineWrapper::new(self.measure, self.config.font_size)
            .with_indent(g.continuation_indent_em * self.config.font_size)
            .with_right_field(g.max_right_field_pt, g.right_field_gap_pt)
    }

    fn title_line_height(&self) -> f32 {
        self.config.title_font_size() * self.config.geometry.line_height_factor
    }

    /// The title wrapped to the full text width of the page.
    fn title_lines(&self, title: &str) -> Vec<String> {
        LineWrapper::new(self.measure, self.config.title_font_size())
            .wrap(
                &RenderLine::styled(title, TextStyle::Bold),
                self.page_width - 2.0 * self.margin,
            )
            .iter()
            .map(RenderLine::text)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Top and bottom of the column area, below a title of `title_lines` lines.
    fn content_bounds(&self, title_lines: usize) -> (f32, f32) {
        let top = self.margin
            + title_lines as f32 * self.title_line_height()
            + self.line_height * 0.5;
        (top, self.page_height - self.margin)
    }

    /// Wrap, check limits and place every block of `doc`.
    #[instrument(skip_all, fields(title = %doc.title, blocks = doc.blocks.len()))]
    pub fn layout(&self, doc: &RenderDocument) -> Result<DocumentLayout> {
        let wrapper = self.body_wrapper();
        let wrapped: Vec<Vec<RenderLine>> = doc
            .blocks
            .iter()
            .map(|block| {
                block
                    .lines
                    .iter()
                    .flat_map(|line| wrapper.wrap(line, self.column_width))
                    .collect()
            })
            .collect();

        let wrapped_lines: usize = wrapped.iter().map(Vec::len).sum();
        let limit = self.config.limits.max_wrapped_lines;
        if wrapped_lines > limit {
            warn!(wrapped_lines, limit, "Document too long to lay out");
            return Err(HoldlistError::LineLimitExceeded {
                count: wrapped_lines,
                limit,
            });
        }

        let title = self.title_lines(&doc.title);
        let (content_top, content_bottom) = self.content_bounds(title.len());
        if content_bottom - content_top < self.line_height {
            return Err(HoldlistError::InvalidLayout(
                "the title leaves no room for the list".into(),
            ));
        }

        let mut flow = Flow {
            paginator: self,
            wrapper: &wrapper,
            title: &title,
            content_top,
            content_bottom,
            pages: Vec::new(),
            column: 0,
            y: content_top,
            lines_in_column: 0,
        };
        flow.start_page()?;
        for (block, lines) in doc.blocks.iter().zip(wrapped) {
            flow.place_block(block, lines)?;
        }

        let mut pages = flow.pages;
        self.add_footers(&mut pages);

        info!(pages = pages.len(), wrapped_lines, "Layout complete");

        Ok(DocumentLayout {
            title: doc.title.clone(),
            page_width: self.page_width,
            page_height: self.page_height,
            pages,
            wrapped_lines,
        })
    }

    /// Centred "Page X of Y" near the bottom edge of every page.
    fn add_footers(&self, pages: &mut [PageContent]) {
        let total = pages.len();
        let y = self.page_height - self.config.geometry.footer_offset_pt();
        for (i, page) in pages.iter_mut().enumerate() {
            page.items.push(PlacedText {
                x: self.page_width / 2.0,
                y,
                text: format!("Page {} of {total}", i + 1),
                style: TextStyle::Normal,
                size: self.config.font_size,
                align: Align::Center,
            });
        }
    }
}

/// A section heading marked as continued from an earlier column.
pub fn continued_heading(heading: &RenderLine) -> RenderLine {
    let mut line = heading.clone();
    line.right = None;
    match line.segments.last_mut() {
        Some(last) => last.text.push_str(CONTINUED_SUFFIX),
        None => line
            .segments
            .push(Segment::new(CONTINUED_SUFFIX.trim_start(), TextStyle::Bold)),
    }
    line
}

fn trailing_blanks(lines: &[RenderLine]) -> usize {
    lines.iter().rev().take_while(|l| l.is_blank()).count()
}

/// Lines from the start of a section-opening block up to and including its
/// first entry line: the heading, its spacer, and one line of content.
fn opening_lines(lines: &[RenderLine]) -> usize {
    let spacer = lines.iter().position(RenderLine::is_blank).unwrap_or(lines.len());
    lines[spacer..]
        .iter()
        .position(|l| !l.is_blank())
        .map_or(lines.len(), |i| spacer + i + 1)
}

// -- Placement state ----------------------------------------------------------

/// Cursor state while blocks are being placed.
struct Flow<'p> {
    paginator: &'p Paginator<'p>,
    wrapper: &'p LineWrapper<'p>,
    title: &'p [String],
    content_top: f32,
    content_bottom: f32,
    pages: Vec<PageContent>,
    column: usize,
    /// Top of the next line, in points from the top of the page.
    y: f32,
    lines_in_column: usize,
}

impl Flow<'_> {
    fn fits(&self, height: f32) -> bool {
        self.y + height <= self.content_bottom + self.paginator.slack
    }

    fn place_block(&mut self, block: &RenderBlock, mut lines: Vec<RenderLine>) -> Result<()> {
        let line_height = self.paginator.line_height;
        let height = lines.len() as f32 * line_height;
        let capacity = self.content_bottom - self.content_top;

        if height > capacity + self.paginator.slack {
            debug!(lines = lines.len(), "Block taller than a column, flowing");
            if block.has_heading
                && self.lines_in_column > 0
                && !self.fits(opening_lines(&lines) as f32 * line_height)
            {
                self.advance(block, false)?;
            }
            return self.flow(block, &lines);
        }

        if !self.fits(height) {
            let kept = lines.len() - trailing_blanks(&lines);
            if kept < lines.len() && self.fits(kept as f32 * line_height) {
                lines.truncate(kept);
            } else {
                self.advance(block, !block.has_heading)?;
            }
        }
        self.flow(block, &lines)
    }

    /// Place lines one at a time, breaking columns as needed. Spacer lines
    /// that would open a new column are dropped.
    fn flow(&mut self, block: &RenderBlock, lines: &[RenderLine]) -> Result<()> {
        for (i, line) in lines.iter().enumerate() {
            if !self.fits(self.paginator.line_height) && self.lines_in_column > 0 {
                if line.is_blank() {
                    continue;
                }
                // Past its first line, even an opening block is mid-section.
                self.advance(block, !block.has_heading || i > 0)?;
            }
            self.place_line(line);
        }
        Ok(())
    }

    /// Move to the next column or page. When `continuing`, the block's section
    /// heading is repeated at the top.
    fn advance(&mut self, block: &RenderBlock, continuing: bool) -> Result<()> {
        if self.column + 1 < usize::from(self.paginator.config.columns) {
            self.column += 1;
            self.reset_column();
        } else {
            self.start_page()?;
        }

        if continuing && let Some(heading) = &block.heading {
            let continued = continued_heading(heading);
            for line in self.wrapper.wrap(&continued, self.paginator.column_width) {
                self.place_line(&line);
            }
        }
        Ok(())
    }

    fn start_page(&mut self) -> Result<()> {
        let limit = self.paginator.config.limits.max_pages;
        if self.pages.len() >= limit {
            warn!(limit, "Page limit reached");
            return Err(HoldlistError::PageLimitExceeded {
                count: self.pages.len() + 1,
                limit,
            });
        }

        let p = self.paginator;
        let size = p.config.title_font_size();
        let title_lh = p.title_line_height();
        let items = self
            .title
            .iter()
            .enumerate()
            .map(|(i, text)| PlacedText {
                x: p.page_width / 2.0,
                y: p.margin + size + i as f32 * title_lh,
                text: text.clone(),
                style: TextStyle::Bold,
                size,
                align: Align::Center,
            })
            .collect();

        self.pages.push(PageContent { items });
        self.column = 0;
        self.reset_column();
        debug!(page = self.pages.len(), "Started page");
        Ok(())
    }

    fn reset_column(&mut self) {
        self.y = self.content_top;
        self.lines_in_column = 0;
    }

    fn place_line(&mut self, line: &RenderLine) {
        let p = self.paginator;
        let size = p.config.font_size;
        let baseline = self.y + size;
        let left = p.column_left(self.column);
        let mut items = Vec::new();

        if !line.is_blank() {
            let mut x = left;
            if line.continuation {
                x += self.wrapper.indent();
            }
            for segment in &line.segments {
                if !segment.text.trim().is_empty() {
                    items.push(PlacedText {
                        x,
                        y: baseline,
                        text: segment.text.clone(),
                        style: segment.style,
                        size,
                        align: Align::Left,
                    });
                }
                x += self.wrapper.width(&segment.text, segment.style);
            }
            if let Some(right) = &line.right {
                items.push(PlacedText {
                    x: left + p.column_width,
                    y: baseline,
                    text: right.text.clone(),
                    style: right.style,
                    size,
                    align: Align::Right,
                });
            }
        }

        if let Some(page) = self.pages.last_mut() {
            page.items.extend(items);
        }
        self.y += p.line_height;
        self.lines_in_column += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Base14Metrics;

    const TITLE: &str = "Adult reservation list — Springfield Library — 04/03/24";
    const HEADING: &str = "Adult Fiction — Crime";

    fn doc(blocks: Vec<RenderBlock>) -> RenderDocument {
        RenderDocument {
            title: TITLE.into(),
            blocks,
        }
    }

    /// `n` one-word lines named `{tag} 0..n`, outside any section.
    fn plain_block(tag: &str, n: usize) -> RenderBlock {
        RenderBlock {
            lines: (0..n).map(|i| RenderLine::plain(format!("{tag} {i}"))).collect(),
            heading: None,
            has_heading: false,
        }
    }

    fn heading_line() -> RenderLine {
        RenderLine::styled(HEADING, TextStyle::Bold)
    }

    /// A block opening the section: heading, spacer, then `n` lines.
    fn opening_block(tag: &str, n: usize) -> RenderBlock {
        let mut lines = vec![heading_line(), RenderLine::blank()];
        lines.extend((0..n).map(|i| RenderLine::plain(format!("{tag} {i}"))));
        RenderBlock {
            lines,
            heading: Some(heading_line()),
            has_heading: true,
        }
    }

    /// A later block in the same section.
    fn section_block(tag: &str, n: usize) -> RenderBlock {
        RenderBlock {
            heading: Some(heading_line()),
            ..plain_block(tag, n)
        }
    }

    /// Three-line blocks filling two single-column pages and spilling onto a third.
    fn three_page_blocks(p: &Paginator<'_>) -> Vec<RenderBlock> {
        let per_page = p.lines_per_column(TITLE) / 3;
        (0..per_page * 2 + 1)
            .map(|i| plain_block(&format!("b{i}"), 3))
            .collect()
    }

    /// A flow on a fresh page whose columns hold exactly `lines` lines.
    fn bare_flow<'p>(p: &'p Paginator<'p>, wrapper: &'p LineWrapper<'p>, lines: usize) -> Flow<'p> {
        Flow {
            paginator: p,
            wrapper,
            title: &[],
            content_top: 0.0,
            content_bottom: lines as f32 * p.line_height(),
            pages: vec![PageContent::default()],
            column: 0,
            y: 0.0,
            lines_in_column: 0,
        }
    }

    fn config(columns: u8) -> LayoutConfig {
        LayoutConfig {
            columns,
            ..LayoutConfig::default()
        }
    }

    fn find<'l>(layout: &'l DocumentLayout, text: &str) -> (usize, &'l PlacedText) {
        layout
            .items()
            .find(|(_, t)| t.text == text)
            .unwrap_or_else(|| panic!("{text:?} was not placed"))
    }

    #[test]
    fn empty_document_is_one_page_with_title_and_footer() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let layout = Paginator::new(&cfg, &m).unwrap().layout(&doc(vec![])).unwrap();

        assert_eq!(layout.page_count(), 1);
        let texts: Vec<&str> = layout.pages[0].items.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec![TITLE, "Page 1 of 1"]);
        assert_eq!(layout.pages[0].items[0].align, Align::Center);
    }

    #[test]
    fn every_page_gets_a_numbered_footer() {
        let cfg = config(1);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let blocks = three_page_blocks(&p);
        let layout = p.layout(&doc(blocks)).unwrap();

        let total = layout.page_count();
        assert_eq!(total, 3);
        for (i, page) in layout.pages.iter().enumerate() {
            assert!(
                page.items
                    .iter()
                    .any(|t| t.text == format!("Page {} of {total}", i + 1))
            );
        }
    }

    #[test]
    fn line_cap_is_inclusive() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();

        let at_cap: Vec<RenderBlock> =
            (0..1_200).map(|i| plain_block(&format!("b{i}"), 10)).collect();
        let layout = p.layout(&doc(at_cap.clone())).unwrap();
        assert_eq!(layout.wrapped_lines, 12_000);

        let mut over = at_cap;
        over.push(plain_block("extra", 1));
        let err = p.layout(&doc(over)).unwrap_err();
        assert!(matches!(
            err,
            HoldlistError::LineLimitExceeded {
                count: 12_001,
                limit: 12_000
            }
        ));
        assert!(err.to_string().contains("12000"));
    }

    #[test]
    fn page_cap_stops_layout() {
        let mut cfg = config(1);
        cfg.limits.max_pages = 2;
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let blocks = three_page_blocks(&p);

        let err = p.layout(&doc(blocks)).unwrap_err();
        assert!(matches!(
            err,
            HoldlistError::PageLimitExceeded { count: 3, limit: 2 }
        ));
    }

    #[test]
    fn block_that_does_not_fit_moves_whole_to_next_column() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let per_column = p.lines_per_column(TITLE);

        let layout = p
            .layout(&doc(vec![
                plain_block("fill", per_column - 3),
                plain_block("moved", 6),
            ]))
            .unwrap();

        let (page, first) = find(&layout, "moved 0");
        let (_, last) = find(&layout, "moved 5");
        assert_eq!(page, 0);
        assert_eq!(first.x, p.column_left(1));
        assert_eq!(last.x, p.column_left(1));
    }

    #[test]
    fn trailing_spacers_are_trimmed_to_keep_a_block_in_place() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let per_column = p.lines_per_column(TITLE);

        let mut tail = plain_block("tail", 4);
        tail.lines.push(RenderLine::blank());
        tail.lines.push(RenderLine::blank());

        let layout = p
            .layout(&doc(vec![plain_block("fill", per_column - 4), tail]))
            .unwrap();

        let (page, last) = find(&layout, "tail 3");
        assert_eq!(page, 0);
        assert_eq!(last.x, p.column_left(0));
        assert!(
            layout
                .items()
                .all(|(_, t)| t.align != Align::Left || t.x < p.column_left(1))
        );
    }

    #[test]
    fn section_continued_in_next_column_repeats_heading() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let per_column = p.lines_per_column(TITLE);

        let layout = p
            .layout(&doc(vec![
                opening_block("open", per_column - 4),
                section_block("next", 6),
            ]))
            .unwrap();

        let continued = format!("{HEADING} (cont.)");
        let (page, heading) = find(&layout, &continued);
        let (_, next) = find(&layout, "next 0");
        assert_eq!(page, 0);
        assert_eq!(heading.x, p.column_left(1));
        assert_eq!(heading.style, TextStyle::Bold);
        assert!(heading.y < next.y);
        // The continuation heading is not a body line.
        assert_eq!(layout.wrapped_lines, per_column - 2 + 6);
    }

    #[test]
    fn new_section_at_column_top_has_no_continuation() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let per_column = p.lines_per_column(TITLE);

        let layout = p
            .layout(&doc(vec![
                plain_block("fill", per_column - 2),
                opening_block("open", 4),
            ]))
            .unwrap();

        assert!(!layout.items().any(|(_, t)| t.text.ends_with(CONTINUED_SUFFIX)));
        let (_, heading) = find(&layout, HEADING);
        assert_eq!(heading.x, p.column_left(1));
    }

    #[test]
    fn oversized_block_flows_across_pages() {
        let cfg = config(1);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let per_column = p.lines_per_column(TITLE);

        let layout = p
            .layout(&doc(vec![
                opening_block("open", 2),
                section_block("long", per_column * 2),
            ]))
            .unwrap();

        assert_eq!(layout.page_count(), 3);
        for page in &layout.pages[1..] {
            let first_body = page
                .items
                .iter()
                .find(|t| t.align == Align::Left)
                .map(|t| t.text.as_str());
            assert_eq!(first_body, Some("Adult Fiction — Crime (cont.)"));
        }
        // The block starts straight after the opening block on page one.
        assert_eq!(find(&layout, "long 0").0, 0);
    }

    #[test]
    fn oversized_section_never_strands_its_heading() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let per_column = p.lines_per_column(TITLE);

        let layout = p
            .layout(&doc(vec![
                plain_block("fill", per_column - 1),
                opening_block("long", per_column * 2),
            ]))
            .unwrap();

        let (page, heading) = find(&layout, HEADING);
        let (first_page, first) = find(&layout, "long 0");
        assert_eq!(page, 0);
        assert_eq!(heading.x, p.column_left(1));
        assert_eq!((first_page, first.x), (0, p.column_left(1)));
        assert!(heading.y < first.y);

        // Where the block breaks again the section is marked as continued.
        let next_page_top = layout.pages[1]
            .items
            .iter()
            .find(|t| t.align == Align::Left)
            .map(|t| t.text.as_str());
        assert_eq!(next_page_top, Some("Adult Fiction — Crime (cont.)"));
    }

    #[test]
    fn oversized_section_opens_in_place_when_its_lead_fits() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let per_column = p.lines_per_column(TITLE);

        let layout = p
            .layout(&doc(vec![
                plain_block("fill", per_column - 4),
                opening_block("long", per_column * 2),
            ]))
            .unwrap();

        let (_, heading) = find(&layout, HEADING);
        let (_, first) = find(&layout, "long 0");
        assert_eq!(heading.x, p.column_left(0));
        assert_eq!(first.x, p.column_left(0));
        let (_, continued) = find(&layout, "Adult Fiction — Crime (cont.)");
        assert_eq!(continued.x, p.column_left(1));
    }

    #[test]
    fn overrun_within_slack_stays_in_column() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let w = p.body_wrapper();
        let lh = p.line_height();

        // Ten-line columns; the block ends half a line past the bottom.
        let mut flow = bare_flow(&p, &w, 10);
        flow.y = 0.5 * lh;
        flow.place_block(&plain_block("fill", 6), plain_block("fill", 6).lines).unwrap();
        let block = plain_block("kept", 4);
        flow.place_block(&block, block.lines.clone()).unwrap();

        assert_eq!(flow.column, 0);
        let last = flow.pages[0].items.last().unwrap();
        assert_eq!((last.text.as_str(), last.x), ("kept 3", p.column_left(0)));
    }

    #[test]
    fn overrun_beyond_slack_moves_to_next_column() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let w = p.body_wrapper();
        let lh = p.line_height();

        // Same block, now overrunning by 0.7 of a line.
        let mut flow = bare_flow(&p, &w, 10);
        flow.y = 0.7 * lh;
        flow.place_block(&plain_block("fill", 6), plain_block("fill", 6).lines).unwrap();
        let block = plain_block("moved", 4);
        flow.place_block(&block, block.lines.clone()).unwrap();

        assert_eq!(flow.column, 1);
        let first = flow.pages[0].items.iter().find(|t| t.text == "moved 0").unwrap();
        assert_eq!(first.x, p.column_left(1));
    }

    #[test]
    fn barcode_sits_at_the_right_edge_of_its_column() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let line = RenderLine::plain("F SMI Lighthouse").with_right(Segment::normal("30120012345678"));
        let block = RenderBlock {
            lines: vec![line],
            heading: None,
            has_heading: false,
        };

        let layout = p.layout(&doc(vec![block])).unwrap();
        let (_, barcode) = find(&layout, "30120012345678");
        assert_eq!(barcode.align, Align::Right);
        assert_eq!(barcode.x, p.column_left(0) + p.column_width());
    }

    #[test]
    fn wrapped_continuation_is_indented() {
        let cfg = config(2);
        let m = Base14Metrics::new(cfg.font);
        let p = Paginator::new(&cfg, &m).unwrap();
        let long = "word ".repeat(80);
        let block = RenderBlock {
            lines: vec![RenderLine::plain(long.trim())],
            heading: None,
            has_heading: false,
        };

        let layout = p.layout(&doc(vec![block])).unwrap();
        assert!(layout.wrapped_lines > 1);
        let body: Vec<&PlacedText> = layout.pages[0]
            .items
            .iter()
            .filter(|t| t.align == Align::Left)
            .collect();
        assert_eq!(body[0].x, p.column_left(0));
        assert_eq!(body[1].x, p.column_left(0) + 1.5 * cfg.font_size);
    }

    #[test]
    fn narrow_columns_are_rejected() {
        let mut cfg = config(2);
        cfg.font_size = 24.0;
        cfg.geometry.margin_mm = 90.0;
        let m = Base14Metrics::new(cfg.font);
        assert!(matches!(
            Paginator::new(&cfg, &m),
            Err(HoldlistError::InvalidLayout(_))
        ));
    }
}
