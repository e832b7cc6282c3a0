// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tick geometry engine.
//!
//! [`compute_tick_plan`] runs once per redraw and produces a [`TickPlan`]: everything a
//! backend needs to draw the ticks, already resolved for the axis orientation. Backends
//! never look at the scale or the [`AxisSpec`] again.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Line, Point, Vec2};
use peniko::Color;
use tickmark_text::{BaselineShift, TextAnchor, TextStyle};

use crate::axis::AxisSpec;
use crate::error::AxisError;
use crate::orient::AxisDirection;
use crate::scale::Scale;
use crate::style::StrokeStyle;

/// Baseline shift of labels on a `top` axis.
pub const TOP_LABEL_SHIFT: BaselineShift = BaselineShift::NONE;
/// Baseline shift of labels on a `bottom` axis.
pub const BOTTOM_LABEL_SHIFT: BaselineShift = BaselineShift::from_em(0.71);
/// Baseline shift of labels on `left` and `right` axes.
pub const VERTICAL_LABEL_SHIFT: BaselineShift = BaselineShift::from_em(0.32);

/// One tick: its value, where it sits, and what it says.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick<V> {
    /// The data value.
    pub value: V,
    /// Position of the tick on the baseline, in axis-local coordinates.
    pub position: Point,
    /// Formatted label. Empty means the label is suppressed.
    pub label: String,
}

/// Paint and placement shared by every tick label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Label font.
    pub font: TextStyle,
    /// Label fill.
    pub fill: Color,
    /// Horizontal anchoring of the label at its origin.
    pub anchor: TextAnchor,
    /// Vertical baseline adjustment.
    pub baseline_shift: BaselineShift,
}

/// Backend-agnostic tick geometry for one redraw.
#[derive(Clone, Debug, PartialEq)]
pub struct TickPlan<V> {
    /// Orientation family and outward sign.
    pub direction: AxisDirection,
    /// Ticks in generation (or caller) order.
    pub ticks: Vec<Tick<V>>,
    /// End of each tick mark relative to the tick position.
    pub line_end: Vec2,
    /// Label origin relative to the tick position, excluding the baseline shift.
    pub label_offset: Vec2,
    /// Label styling.
    pub label: LabelStyle,
    /// Tick mark stroke.
    pub stroke: StrokeStyle,
}

impl<V> TickPlan<V> {
    /// The tick mark segment for `tick`.
    pub fn tick_line(&self, tick: &Tick<V>) -> Line {
        Line::new(tick.position, tick.position + self.line_end)
    }

    /// The label origin for `tick`, excluding the baseline shift.
    pub fn label_origin(&self, tick: &Tick<V>) -> Point {
        tick.position + self.label_offset
    }

    /// Whether the plan has no ticks.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Computes the tick plan for `spec` against `scale`.
///
/// Tick values come from, in order of preference:
/// 1. `spec.tick_values`, used verbatim;
/// 2. the scale's tick generator, given `spec.tick_count`;
/// 3. the scale's domain.
///
/// If none is available this returns [`AxisError::NoTickSource`].
pub fn compute_tick_plan<S>(
    scale: &S,
    spec: &AxisSpec<S::Value>,
) -> Result<TickPlan<S::Value>, AxisError>
where
    S: Scale + ?Sized,
{
    let (values, source) = if let Some(values) = &spec.tick_values {
        (values.clone(), "explicit")
    } else if let Some(values) = scale.ticks(spec.tick_count) {
        (values, "generated")
    } else if let Some(values) = scale.domain() {
        (values, "domain")
    } else {
        log::warn!(
            "axis {:?}: scale has no tick generator and no domain",
            spec.orient
        );
        return Err(AxisError::NoTickSource);
    };

    let base_format = scale.tick_format(spec.tick_count);
    let format = |value: &S::Value| -> String {
        let base = match &base_format {
            Some(f) => f(value),
            None => value.to_string(),
        };
        match &spec.tick_format {
            Some(_) if base.is_empty() => base,
            Some(custom) => custom(value),
            None => base,
        }
    };

    let direction = spec.orient.direction();
    let sign = direction.sign();
    let spacing = spec.inner_tick_size.max(0.0) + spec.tick_padding;
    let (anchor, baseline_shift) = match direction {
        AxisDirection::Horizontal { .. } if sign < 0.0 => (TextAnchor::Middle, TOP_LABEL_SHIFT),
        AxisDirection::Horizontal { .. } => (TextAnchor::Middle, BOTTOM_LABEL_SHIFT),
        AxisDirection::Vertical { .. } if sign < 0.0 => (TextAnchor::End, VERTICAL_LABEL_SHIFT),
        AxisDirection::Vertical { .. } => (TextAnchor::Start, VERTICAL_LABEL_SHIFT),
    };

    let mut ticks = Vec::with_capacity(values.len());
    for value in values {
        let offset = scale.apply(&value);
        if !offset.is_finite() {
            log::warn!("axis {:?}: tick {value} maps to {offset}", spec.orient);
        }
        let label = format(&value);
        ticks.push(Tick {
            position: direction.point(offset, 0.0),
            label,
            value,
        });
    }

    log::debug!(
        "axis {:?}: {} ticks from {source} values",
        spec.orient,
        ticks.len()
    );

    Ok(TickPlan {
        direction,
        ticks,
        line_end: direction.offset(0.0, sign * spec.inner_tick_size),
        label_offset: direction.offset(0.0, sign * spacing),
        label: LabelStyle {
            font: spec.font.clone(),
            fill: spec.tick_stroke.color,
            anchor,
            baseline_shift,
        },
        stroke: spec.tick_stroke.clone(),
    })
}
