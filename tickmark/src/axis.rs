// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.
//!
//! A single [`AxisSpec`] with an [`AxisOrient`] describes any of the four axis placements.
//! The spec is immutable per render; the scale it is drawn against is supplied separately
//! at draw time.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;
use tickmark_text::{FontFamily, TextMeasurer, TextStyle};

use crate::error::AxisError;
use crate::orient::AxisOrient;
use crate::plan::{TickPlan, compute_tick_plan};
use crate::scale::{Scale, TickFormatter};
use crate::style::{DomainStyle, ShapeRendering, StrokeStyle};

/// Configuration for one axis.
#[derive(Clone)]
pub struct AxisSpec<V> {
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Whether to draw the baseline (domain line).
    pub show_domain: bool,
    /// Whether to draw tick marks and labels.
    pub show_ticks: bool,
    /// Length of each tick mark, in pixels, pointing away from the plot.
    pub inner_tick_size: f64,
    /// Length of the end caps of the baseline, in pixels.
    pub outer_tick_size: f64,
    /// Gap between the tick mark end and its label.
    pub tick_padding: f64,
    /// Tick count hint passed to the scale's tick generator and formatter.
    pub tick_count: Option<usize>,
    /// Explicit tick values. Used verbatim (order and duplicates preserved) when set.
    pub tick_values: Option<Vec<V>>,
    /// Label formatter override.
    ///
    /// Applied only where the scale's own formatter produces a non-empty label, so label
    /// suppression by the scale survives a custom formatter.
    pub tick_format: Option<TickFormatter<V>>,
    /// Label font.
    pub font: TextStyle,
    /// Tick mark stroke. Its color also fills the labels.
    pub tick_stroke: StrokeStyle,
    /// Baseline styling.
    pub domain: DomainStyle,
    /// Class applied to the axis group in the SVG tree.
    pub class_name: Option<String>,
}

impl<V: fmt::Debug> fmt::Debug for AxisSpec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisSpec")
            .field("orient", &self.orient)
            .field("show_domain", &self.show_domain)
            .field("show_ticks", &self.show_ticks)
            .field("inner_tick_size", &self.inner_tick_size)
            .field("outer_tick_size", &self.outer_tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("tick_count", &self.tick_count)
            .field("tick_values", &self.tick_values)
            .field("tick_format", &self.tick_format.is_some())
            .field("font", &self.font)
            .field("tick_stroke", &self.tick_stroke)
            .field("domain", &self.domain)
            .field("class_name", &self.class_name)
            .finish()
    }
}

impl<V> AxisSpec<V> {
    /// Creates an axis with defaults.
    ///
    /// The returned axis has:
    /// - baseline and ticks shown
    /// - `inner_tick_size = 6`, `outer_tick_size = 6`, `tick_padding = 3`
    /// - no tick count, tick values or formatter override
    /// - 12px sans-serif labels, black 1px strokes
    /// - class `"axis"`.
    pub fn new(orient: AxisOrient) -> Self {
        Self {
            orient,
            show_domain: true,
            show_ticks: true,
            inner_tick_size: 6.0,
            outer_tick_size: 6.0,
            tick_padding: 3.0,
            tick_count: None,
            tick_values: None,
            tick_format: None,
            font: TextStyle::default(),
            tick_stroke: StrokeStyle::default(),
            domain: DomainStyle::default(),
            class_name: Some(String::from("axis")),
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom() -> Self {
        Self::new(AxisOrient::Bottom)
    }

    /// Convenience constructor for a `top` axis.
    pub fn top() -> Self {
        Self::new(AxisOrient::Top)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left() -> Self {
        Self::new(AxisOrient::Left)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right() -> Self {
        Self::new(AxisOrient::Right)
    }

    /// Enable or disable the baseline.
    pub fn with_domain(mut self, show: bool) -> Self {
        self.show_domain = show;
        self
    }

    /// Enable or disable ticks and labels.
    pub fn with_ticks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    /// Set both the inner and outer tick sizes.
    pub fn with_tick_size(mut self, size: f64) -> Self {
        self.inner_tick_size = size;
        self.outer_tick_size = size;
        self
    }

    /// Set the inner (per-tick) size.
    pub fn with_inner_tick_size(mut self, size: f64) -> Self {
        self.inner_tick_size = size;
        self
    }

    /// Set the outer (baseline end cap) size.
    pub fn with_outer_tick_size(mut self, size: f64) -> Self {
        self.outer_tick_size = size;
        self
    }

    /// Set the gap between ticks and labels.
    pub fn with_tick_padding(mut self, padding: f64) -> Self {
        self.tick_padding = padding;
        self
    }

    /// Set the tick count hint.
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = Some(count);
        self
    }

    /// Use these tick values instead of asking the scale.
    pub fn with_tick_values(mut self, values: impl Into<Vec<V>>) -> Self {
        self.tick_values = Some(values.into());
        self
    }

    /// Set a label formatter override.
    pub fn with_tick_format(mut self, f: impl Fn(&V) -> String + 'static) -> Self {
        self.tick_format = Some(Arc::new(f));
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font.font_size = size;
        self
    }

    /// Set the label font family.
    pub fn with_font_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.font.font_family = family.into();
        self
    }

    /// Set the tick stroke color and opacity.
    pub fn with_tick_stroke(mut self, color: Color, opacity: f64) -> Self {
        self.tick_stroke.color = color;
        self.tick_stroke.opacity = opacity;
        self
    }

    /// Set the baseline stroke.
    pub fn with_domain_stroke(mut self, color: Color, width: f64, opacity: f64) -> Self {
        self.domain.stroke = StrokeStyle {
            color,
            width,
            opacity,
        };
        self
    }

    /// Set the baseline shape-rendering hint.
    pub fn with_shape_rendering(mut self, hint: ShapeRendering) -> Self {
        self.domain.shape_rendering = hint;
        self
    }

    /// Set the SVG class of the axis group.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl<V: Clone + fmt::Display> AxisSpec<V> {
    /// Computes the tick plan for `scale`. See [`compute_tick_plan`].
    pub fn tick_plan<S>(&self, scale: &S) -> Result<TickPlan<V>, AxisError>
    where
        S: Scale<Value = V> + ?Sized,
    {
        compute_tick_plan(scale, self)
    }

    /// Measure the thickness this axis occupies along its outward normal.
    ///
    /// This is the larger of the baseline end caps and, when ticks are shown, the tick
    /// length plus padding plus the largest label extent (height for horizontal axes,
    /// width for vertical ones).
    pub fn measure<S>(&self, scale: &S, measurer: &dyn TextMeasurer) -> Result<f64, AxisError>
    where
        S: Scale<Value = V> + ?Sized,
    {
        let domain_extent = if self.show_domain {
            self.outer_tick_size.max(0.0)
        } else {
            0.0
        };
        if !self.show_ticks {
            return Ok(domain_extent);
        }

        let plan = self.tick_plan(scale)?;
        let horizontal = self.orient.is_horizontal();
        let mut max_label_extent = 0.0_f64;
        for tick in &plan.ticks {
            if tick.label.is_empty() {
                continue;
            }
            let metrics = measurer.measure(&tick.label, &self.font);
            let extent = if horizontal {
                metrics.line_height()
            } else {
                metrics.advance_width
            };
            max_label_extent = max_label_extent.max(extent);
        }
        let tick_extent = self.inner_tick_size.max(0.0) + self.tick_padding + max_label_extent;
        Ok(domain_extent.max(tick_extent))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use tickmark_text::HeuristicTextMeasurer;

    use super::*;
    use crate::scale::{FnScale, ScaleLinear};

    #[test]
    fn tick_size_sets_inner_and_outer() {
        let axis = AxisSpec::<f64>::left().with_tick_size(4.0);
        assert_eq!(axis.inner_tick_size, 4.0);
        assert_eq!(axis.outer_tick_size, 4.0);
    }

    #[test]
    fn measure_respects_ticks_and_domain_toggles() {
        let measurer = HeuristicTextMeasurer;
        let scale = ScaleLinear::new((0.0, 1000.0), (0.0, 300.0));
        let axis = AxisSpec::left().with_tick_count(5);

        let with_all = axis.measure(&scale, &measurer).unwrap();
        let no_ticks = axis
            .clone()
            .with_ticks(false)
            .measure(&scale, &measurer)
            .unwrap();
        let none = axis
            .clone()
            .with_ticks(false)
            .with_domain(false)
            .measure(&scale, &measurer)
            .unwrap();

        // "1000" at 12px is 4 * 7.2 wide, plus 6 tick + 3 padding.
        assert!((with_all - (9.0 + 28.8)).abs() < 1e-9, "got {with_all}");
        assert_eq!(no_ticks, 6.0);
        assert_eq!(none, 0.0);
    }

    #[test]
    fn horizontal_measure_uses_line_height() {
        let measurer = HeuristicTextMeasurer;
        let scale = ScaleLinear::new((0.0, 10.0), (0.0, 300.0));
        let thickness = AxisSpec::bottom()
            .with_font_size(10.0)
            .measure(&scale, &measurer)
            .unwrap();
        assert!((thickness - 19.0).abs() < 1e-9, "got {thickness}");
    }

    #[test]
    fn measure_propagates_missing_tick_source() {
        let scale = FnScale::new(|v: &f64| *v);
        let err = AxisSpec::bottom()
            .measure(&scale, &HeuristicTextMeasurer)
            .unwrap_err();
        assert_eq!(err, AxisError::NoTickSource);

        let explicit = AxisSpec::bottom()
            .with_tick_values(vec![1.0, 2.0])
            .measure(&scale, &HeuristicTextMeasurer);
        assert!(explicit.is_ok(), "explicit values need no tick source");
    }
}
