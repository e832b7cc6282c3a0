// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text vocabulary shared by the tickmark backends.
//!
//! Axis labels are drawn by two very different backends: a retained SVG tree and an
//! immediate-mode 2D canvas. Both need to agree on:
//! - which font to use ([`TextStyle`]),
//! - how a label is anchored horizontally ([`TextAnchor`]), and
//! - how far the glyph baseline is shifted from the label origin ([`BaselineShift`]).
//!
//! Layout code additionally needs rough label extents, which is what [`TextMeasurer`] is for.
//!
//! This crate is `no_std` and only needs `alloc` for owned family names and CSS strings.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

/// Text styling inputs for tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    /// Returns a CSS `font` shorthand, as accepted by the canvas `font` property.
    ///
    /// Normal style and weight are omitted, so the common case is just `"12px sans-serif"`.
    #[must_use]
    pub fn css_font(&self) -> String {
        let mut out = String::new();
        if self.font_style != FontStyle::Normal {
            out.push_str(self.font_style.as_css());
            out.push(' ');
        }
        if self.font_weight != FontWeight::NORMAL {
            out.push_str(&format!("{} ", self.font_weight.0));
        }
        let family = self.font_family.as_css_family();
        out.push_str(&format!("{}px {family}", self.font_size));
        out
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family or a CSS family list (e.g. `"Helvetica Neue, Arial, sans-serif"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for FontFamily {
    fn from(value: &str) -> Self {
        match value.trim() {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            other => Self::Named(Arc::from(other)),
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

impl FontStyle {
    /// CSS keyword for this style.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

/// Horizontal anchoring of a label relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The origin is at the start of the text.
    Start,
    /// The origin is at the horizontal center of the text.
    Middle,
    /// The origin is at the end of the text.
    End,
}

impl TextAnchor {
    /// Value for the SVG `text-anchor` attribute.
    #[must_use]
    pub fn svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }

    /// Value for the canvas `textAlign` property.
    ///
    /// Canvas spells the middle anchor `center`.
    #[must_use]
    pub fn canvas_align(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "center",
            Self::End => "end",
        }
    }
}

/// A vertical shift of the glyph baseline, in units of the font size (`em`).
///
/// Retained backends emit this as a relative `dy` (e.g. `0.71em`); immediate backends resolve
/// it to pixels with [`BaselineShift::to_pixels`]. Both place the baseline at the same spot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaselineShift {
    em: f64,
}

impl BaselineShift {
    /// No shift: the label origin is the alphabetic baseline.
    pub const NONE: Self = Self { em: 0.0 };

    /// Creates a shift of `em` font-size units (positive moves the text down).
    #[must_use]
    pub const fn from_em(em: f64) -> Self {
        Self { em }
    }

    /// The shift in `em` units.
    #[must_use]
    pub fn em(self) -> f64 {
        self.em
    }

    /// The shift in pixels for the given font size.
    #[must_use]
    pub fn to_pixels(self, font_size: f64) -> f64 {
        self.em * font_size
    }

    /// The shift as an SVG length (e.g. `"0.71em"`).
    #[must_use]
    pub fn svg_dy(self) -> String {
        format!("{}em", self.em + 0.0)
    }
}

/// A minimal text measurement interface used for axis layout.
///
/// Implementations can be heuristic, backed by a shaping engine, or backed by web platform
/// text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic text measurer for headless layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}
