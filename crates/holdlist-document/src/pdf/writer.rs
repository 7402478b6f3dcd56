// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — renders laid-out reservation lists with `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use holdlist_core::config::{FontFamily, LayoutConfig, PaperSize};
use holdlist_core::error::Result;
use holdlist_core::types::{RenderDocument, TextStyle};
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use tracing::{debug, info, instrument, warn};

use super::surface::{DrawSurface, render_layout};
use crate::layout::{Align, DocumentLayout, Paginator, PlacedText};
use crate::metrics::{Base14Metrics, TextMeasure};

/// The Base-14 font used for a family and style.
pub fn builtin_font(family: FontFamily, style: TextStyle) -> BuiltinFont {
    match (family, style) {
        (FontFamily::Helvetica, TextStyle::Normal) => BuiltinFont::Helvetica,
        (FontFamily::Helvetica, TextStyle::Bold) => BuiltinFont::HelveticaBold,
        (FontFamily::Helvetica, TextStyle::Italic) => BuiltinFont::HelveticaOblique,
        (FontFamily::Times, TextStyle::Normal) => BuiltinFont::TimesRoman,
        (FontFamily::Times, TextStyle::Bold) => BuiltinFont::TimesBold,
        (FontFamily::Times, TextStyle::Italic) => BuiltinFont::TimesItalic,
        (FontFamily::Courier, TextStyle::Normal) => BuiltinFont::Courier,
        (FontFamily::Courier, TextStyle::Bold) => BuiltinFont::CourierBold,
        (FontFamily::Courier, TextStyle::Italic) => BuiltinFont::CourierOblique,
    }
}

// -- Surface ------------------------------------------------------------------

/// A [`DrawSurface`] collecting printpdf operations page by page.
pub struct PdfSurface {
    family: FontFamily,
    metrics: Base14Metrics,
    page_w: Mm,
    page_h: Mm,
    pages: Vec<PdfPage>,
    current: Option<Vec<Op>>,
}

impl PdfSurface {
    pub fn new(paper_size: PaperSize, family: FontFamily) -> Self {
        let (w_mm, h_mm) = paper_size.dimensions_mm();
        Self {
            family,
            metrics: Base14Metrics::new(family),
            page_w: Mm(w_mm),
            page_h: Mm(h_mm),
            pages: Vec::new(),
            current: None,
        }
    }

    fn flush_page(&mut self) {
        if let Some(ops) = self.current.take() {
            self.pages.push(PdfPage::new(self.page_w, self.page_h, ops));
        }
    }

    /// Serialise every page into PDF bytes.
    pub fn finish(mut self, title: &str) -> Vec<u8> {
        self.flush_page();

        let mut doc = PdfDocument::new(title);
        doc.with_pages(self.pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "printpdf reported warnings while saving");
        }
        output
    }
}

impl DrawSurface for PdfSurface {
    fn begin_page(&mut self) {
        self.flush_page();
        self.current = Some(Vec::new());
    }

    fn draw_text(&mut self, item: &PlacedText) {
        let width = self.metrics.text_width(&item.text, item.style, item.size);
        let x = match item.align {
            Align::Left => item.x,
            Align::Center => item.x - width / 2.0,
            Align::Right => item.x - width,
        };
        // Layout measures down from the top; PDF user space grows upwards.
        let y = self.page_h.into_pt().0 - item.y;
        let font = builtin_font(self.family, item.style);

        let ops = self.current.get_or_insert_with(Vec::new);
        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point { x: Pt(x), y: Pt(y) },
        });
        ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(item.size),
            font,
        });
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(item.text.clone())],
            font,
        });
        ops.push(Op::EndTextSection);
    }

    fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.current.is_some())
    }
}

// -- Writer -------------------------------------------------------------------

/// Lays out and renders [`RenderDocument`]s as PDF.
pub struct PdfWriter {
    config: LayoutConfig,
}

impl PdfWriter {
    /// Create a writer for a layout configuration, rejecting unusable ones.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Paginate a document without drawing it.
    pub fn layout(&self, doc: &RenderDocument) -> Result<DocumentLayout> {
        let metrics = Base14Metrics::new(self.config.font);
        Paginator::new(&self.config, &metrics)?.layout(doc)
    }

    /// Lay out and render a document to PDF bytes.
    ///
    /// Limit violations surface as errors before any output is produced.
    #[instrument(skip(self, doc), fields(title = %doc.title, font = self.config.font.name()))]
    pub fn render(&self, doc: &RenderDocument) -> Result<Vec<u8>> {
        let layout = self.layout(doc)?;

        let mut surface = PdfSurface::new(self.config.geometry.paper_size, self.config.font);
        render_layout(&layout, &mut surface);
        debug!(pages = surface.page_count(), "Pages drawn");

        let bytes = surface.finish(&layout.title);
        info!(
            pages = layout.page_count(),
            bytes = bytes.len(),
            "Rendered reservation list PDF"
        );
        Ok(bytes)
    }

    /// Render a document and write it to `path`. Nothing is written when
    /// rendering fails.
    pub fn write_to_file(&self, doc: &RenderDocument, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(doc)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote reservation list to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdlist_core::HoldlistError;
    use holdlist_core::types::Audience;
    use holdlist_report::process_report;

    const REPORT: &str = "\
Items at Springfield Library
res_itm_noloan 04/03/24
F SMI The lighthouse keeper 30120012345678
Smith, Jane
The lighthouse keeper
Item Type: Adult Fiction
Sequence: Thriller
Reserved at: Springfield
J BRO Dragons at dawn 30120087654321
Brown, Tim
Dragons at dawn
Item Type: Junior Fiction
Reserved at: Springfield
";

    fn pdf_page_count(bytes: &[u8]) -> usize {
        lopdf::Document::load_mem(bytes)
            .expect("output parses as PDF")
            .get_pages()
            .len()
    }

    #[test]
    fn font_mapping_covers_styles() {
        assert!(matches!(
            builtin_font(FontFamily::Times, TextStyle::Italic),
            BuiltinFont::TimesItalic
        ));
        assert!(matches!(
            builtin_font(FontFamily::Courier, TextStyle::Bold),
            BuiltinFont::CourierBold
        ));
    }

    #[test]
    fn renders_each_audience_to_a_valid_pdf() {
        let (_, sorted) = process_report(REPORT).unwrap();
        let writer = PdfWriter::new(LayoutConfig::default()).unwrap();

        for audience in [Audience::Adult, Audience::Junior] {
            let doc = sorted.document(audience);
            let bytes = writer.render(doc).unwrap();
            assert!(bytes.starts_with(b"%PDF"));
            assert_eq!(pdf_page_count(&bytes), writer.layout(doc).unwrap().page_count());
        }
    }

    #[test]
    fn long_list_spans_several_pdf_pages() {
        let mut text = String::from("Items at Springfield Library\nres_itm_noloan 04/03/24\n");
        for i in 0..300 {
            text.push_str(&format!(
                "F AUT Title {i} 30120{i:09}\nAuthor {i}\nTitle {i}\nItem Type: Adult Fiction\nReserved at: Springfield\n"
            ));
        }
        let (_, sorted) = process_report(&text).unwrap();
        let writer = PdfWriter::new(LayoutConfig::default()).unwrap();
        let doc = sorted.document(Audience::Adult);

        let layout = writer.layout(doc).unwrap();
        assert!(layout.page_count() > 1);
        assert_eq!(pdf_page_count(&writer.render(doc).unwrap()), layout.page_count());
    }

    #[test]
    fn surface_counts_open_page() {
        let mut surface = PdfSurface::new(PaperSize::A4, FontFamily::Helvetica);
        assert_eq!(surface.page_count(), 0);
        surface.begin_page();
        surface.begin_page();
        assert_eq!(surface.page_count(), 2);
        let bytes = surface.finish("blank");
        assert_eq!(pdf_page_count(&bytes), 2);
    }

    #[test]
    fn write_to_file_creates_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adult list.pdf");
        let (_, sorted) = process_report(REPORT).unwrap();
        let writer = PdfWriter::new(LayoutConfig::default()).unwrap();

        writer.write_to_file(sorted.document(Audience::Adult), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(pdf_page_count(&bytes), 1);
    }

    #[test]
    fn failed_render_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adult list.pdf");
        let (_, sorted) = process_report(REPORT).unwrap();
        let mut config = LayoutConfig::default();
        config.limits.max_wrapped_lines = 3;
        let writer = PdfWriter::new(config).unwrap();

        let err = writer
            .write_to_file(sorted.document(Audience::Adult), &path)
            .unwrap_err();
        assert!(matches!(err, HoldlistError::LineLimitExceeded { limit: 3, .. }));
        assert!(!path.exists());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LayoutConfig {
            columns: 3,
            ..LayoutConfig::default()
        };
        assert!(PdfWriter::new(config).is_err());
    }
}
