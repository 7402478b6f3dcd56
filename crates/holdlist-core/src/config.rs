// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout configuration and the persisted user settings it is built from.

use serde::{Deserialize, Serialize};

use crate::error::{HoldlistError, Result};

/// Largest report accepted before parsing starts.
pub const MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Hard cap on wrapped lines in one rendered document.
pub const MAX_WRAPPED_LINES: usize = 12_000;

/// Hard cap on pages in one rendered document.
pub const MAX_PAGES: usize = 500;

const MIN_FONT_SIZE: f32 = 6.0;
const MAX_FONT_SIZE: f32 = 24.0;

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Built-in PDF font families available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    /// Settings key for this family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Helvetica => "helvetica",
            Self::Times => "times",
            Self::Courier => "courier",
        }
    }

    /// Parse a family name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "sans" | "sans-serif" => Some(Self::Helvetica),
            "times" | "serif" => Some(Self::Times),
            "courier" | "mono" | "monospace" => Some(Self::Courier),
            _ => None,
        }
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    Letter,
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::Letter => (215.9, 279.4),
        }
    }
}

/// Fixed page furniture shared by every rendered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub paper_size: PaperSize,
    /// Margin on all four sides.
    pub margin_mm: f32,
    /// Gap between columns in two-column mode.
    pub column_gap_mm: f32,
    /// Distance of the footer baseline from the bottom edge.
    pub footer_offset_mm: f32,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
    /// Hanging indent for continuation lines, in ems.
    pub continuation_indent_em: f32,
    /// Most horizontal space ever reserved for a right-aligned field.
    pub max_right_field_pt: f32,
    /// Space kept between wrapped left text and the right field.
    pub right_field_gap_pt: f32,
    /// Fit tolerance as a fraction of one line height.
    pub fit_slack_lines: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            margin_mm: 15.0,
            column_gap_mm: 6.0,
            footer_offset_mm: 8.0,
            line_height_factor: 1.25,
            continuation_indent_em: 1.5,
            max_right_field_pt: 96.0,
            right_field_gap_pt: 6.0,
            fit_slack_lines: 0.6,
        }
    }
}

impl PageGeometry {
    /// Page size in points (width, height).
    pub fn page_size_pt(&self) -> (f32, f32) {
        let (w, h) = self.paper_size.dimensions_mm();
        (w * PT_PER_MM, h * PT_PER_MM)
    }

    pub fn margin_pt(&self) -> f32 {
        self.margin_mm * PT_PER_MM
    }

    pub fn column_gap_pt(&self) -> f32 {
        self.column_gap_mm * PT_PER_MM
    }

    pub fn footer_offset_pt(&self) -> f32 {
        self.footer_offset_mm * PT_PER_MM
    }
}

/// Safety valves against pathological input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLimits {
    pub max_wrapped_lines: usize,
    pub max_pages: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_wrapped_lines: MAX_WRAPPED_LINES,
            max_pages: MAX_PAGES,
        }
    }
}

/// Everything the layout engine needs to know about how to draw a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub font: FontFamily,
    /// Body text size in points.
    pub font_size: f32,
    /// 1 or 2.
    pub columns: u8,
    pub geometry: PageGeometry,
    pub limits: RenderLimits,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font: FontFamily::Helvetica,
            font_size: 10.0,
            columns: 2,
            geometry: PageGeometry::default(),
            limits: RenderLimits::default(),
        }
    }
}

impl LayoutConfig {
    /// Build a config from persisted settings, falling back to the default
    /// for any field that is missing or unreadable.
    pub fn from_settings(settings: &ListSettings) -> Self {
        let defaults = Self::default();
        Self {
            font: FontFamily::from_name(&settings.font).unwrap_or(defaults.font),
            font_size: parse_font_size(&settings.text_size).unwrap_or(defaults.font_size),
            columns: parse_columns(&settings.columns).unwrap_or(defaults.columns),
            ..defaults
        }
    }

    /// The three persisted fields for this config.
    pub fn to_settings(&self) -> ListSettings {
        ListSettings {
            font: self.font.name().to_string(),
            text_size: format!("{}", self.font_size),
            columns: self.columns.to_string(),
        }
    }

    /// Reject values the layout engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(HoldlistError::InvalidLayout(format!(
                "text size {} is outside {MIN_FONT_SIZE}–{MAX_FONT_SIZE} pt",
                self.font_size
            )));
        }
        if !matches!(self.columns, 1 | 2) {
            return Err(HoldlistError::InvalidLayout(format!(
                "column count must be 1 or 2, got {}",
                self.columns
            )));
        }
        Ok(())
    }

    /// Body line height in points.
    pub fn line_height(&self) -> f32 {
        self.font_size * self.geometry.line_height_factor
    }

    /// Title text size in points.
    pub fn title_font_size(&self) -> f32 {
        self.font_size + 2.0
    }

    /// Apply a font name given on the command line.
    pub fn set_font_name(&mut self, name: &str) -> Result<()> {
        self.font = FontFamily::from_name(name)
            .ok_or_else(|| HoldlistError::InvalidLayout(format!("unknown font {name:?}")))?;
        Ok(())
    }
}

/// User preferences as stored on disk: three free-form strings.
///
/// Kept as strings so a hand-edited or outdated file never fails to load;
/// interpretation happens in [`LayoutConfig::from_settings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    pub font: String,
    pub text_size: String,
    pub columns: String,
}

impl Default for ListSettings {
    fn default() -> Self {
        LayoutConfig::default().to_settings()
    }
}

fn parse_font_size(raw: &str) -> Option<f32> {
    let size: f32 = raw.trim().parse().ok()?;
    (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size).then_some(size)
}

fn parse_columns(raw: &str) -> Option<u8> {
    match raw.trim().parse::<u8>().ok()? {
        n @ (1 | 2) => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_defaults() {
        let config = LayoutConfig::from_settings(&ListSettings::default());
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn garbage_fields_fall_back_individually() {
        let settings = ListSettings {
            font: "Comic Sans".into(),
            text_size: "12".into(),
            columns: "seven".into(),
        };
        let config = LayoutConfig::from_settings(&settings);
        assert_eq!(config.font, FontFamily::Helvetica);
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.columns, 2);
    }

    #[test]
    fn out_of_range_size_is_ignored() {
        let settings = ListSettings {
            font: "TIMES".into(),
            text_size: "200".into(),
            columns: "1".into(),
        };
        let config = LayoutConfig::from_settings(&settings);
        assert_eq!(config.font, FontFamily::Times);
        assert_eq!(config.font_size, 10.0);
        assert_eq!(config.columns, 1);
    }

    #[test]
    fn partial_json_loads_with_defaults() {
        let settings: ListSettings = serde_json::from_str(r#"{"font":"courier"}"#).unwrap();
        assert_eq!(settings.font, "courier");
        assert_eq!(settings.columns, "2");
    }

    #[test]
    fn validate_rejects_three_columns() {
        let config = LayoutConfig {
            columns: 3,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HoldlistError::InvalidLayout(_))
        ));
    }

    #[test]
    fn a4_is_about_595_by_842_points() {
        let (w, h) = PageGeometry::default().page_size_pt();
        assert!((w - 595.28).abs() < 0.1);
        assert!((h - 841.89).abs() < 0.1);
    }
}
