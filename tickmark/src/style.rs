// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke and paint styling for axis baselines and tick marks.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

use crate::format::format_number;

/// A stroke: color, width and opacity.
///
/// Opacity is kept separate from the color alpha so the SVG backend can emit it as an
/// `opacity` attribute; the canvas backend folds both into one `rgba(...)` string.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
}

impl StrokeStyle {
    /// Convenience for an opaque stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
        }
    }

    /// Sets the stroke opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// CSS color with the opacity folded into the alpha channel.
    pub fn css_rgba(&self) -> String {
        css_rgba(self.color, self.opacity)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// SVG `shape-rendering` hint for the baseline.
///
/// The raster backend has no equivalent and ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeRendering {
    /// Let the renderer decide.
    Auto,
    /// Favor speed over precision.
    OptimizeSpeed,
    /// Snap edges to the pixel grid.
    #[default]
    CrispEdges,
    /// Favor geometric precision.
    GeometricPrecision,
}

impl ShapeRendering {
    /// The SVG attribute value.
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::OptimizeSpeed => "optimizeSpeed",
            Self::CrispEdges => "crispEdges",
            Self::GeometricPrecision => "geometricPrecision",
        }
    }
}

/// Styling for the baseline (domain line).
#[derive(Clone, Debug, PartialEq)]
pub struct DomainStyle {
    /// Baseline stroke.
    pub stroke: StrokeStyle,
    /// Shape-rendering hint.
    pub shape_rendering: ShapeRendering,
    /// Optional class applied to the baseline path in the SVG tree.
    pub class_name: Option<String>,
}

impl Default for DomainStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::default(),
            shape_rendering: ShapeRendering::CrispEdges,
            class_name: None,
        }
    }
}

/// `#rrggbb` for `color`, ignoring alpha.
pub(crate) fn css_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// `rgba(r, g, b, a)` where `a` is the color alpha times `opacity`.
pub(crate) fn css_rgba(color: Color, opacity: f64) -> String {
    let rgba = color.to_rgba8();
    let alpha = f64::from(rgba.a) / 255.0 * opacity;
    format!(
        "rgba({}, {}, {}, {})",
        rgba.r,
        rgba.g,
        rgba.b,
        format_number(alpha)
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rgba_folds_opacity_into_alpha() {
        let stroke = StrokeStyle::solid(Color::from_rgb8(0x33, 0x66, 0x99), 1.0).with_opacity(0.5);
        assert_eq!(stroke.css_rgba(), "rgba(51, 102, 153, 0.5)");
        assert_eq!(css_hex(stroke.color), "#336699");
    }

    #[test]
    fn baseline_defaults_to_crisp_black() {
        let style = DomainStyle::default();
        assert_eq!(style.shape_rendering.as_svg(), "crispEdges");
        assert_eq!(css_hex(style.stroke.color), "#000000");
        assert_eq!(style.stroke.css_rgba(), "rgba(0, 0, 0, 1)");
    }
}
