// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between axis geometry and drawing backends.

use kurbo::{BezPath, Line, Point};

use crate::plan::LabelStyle;
use crate::style::{DomainStyle, StrokeStyle};

/// A surface an axis can be drawn onto.
///
/// Axis geometry is computed once and replayed through this trait, so every backend sees the
/// same vertices in the same order. Implementations are either value-producing (a retained
/// tree) or stateful (an immediate-mode context); the calls are identical either way.
pub trait DrawTarget {
    /// Strokes the baseline path.
    fn draw_path(&mut self, path: &BezPath, style: &DomainStyle);

    /// Starts a tick pass. The styles apply to every following [`draw_line`] and
    /// [`draw_text`] call until the next pass.
    ///
    /// [`draw_line`]: DrawTarget::draw_line
    /// [`draw_text`]: DrawTarget::draw_text
    fn begin_ticks(&mut self, stroke: &StrokeStyle, label: &LabelStyle);

    /// Strokes one tick mark.
    fn draw_line(&mut self, line: Line);

    /// Draws one label. `origin` excludes the baseline shift of the current [`LabelStyle`].
    fn draw_text(&mut self, text: &str, origin: Point);
}

impl<T: DrawTarget + ?Sized> DrawTarget for &mut T {
    fn draw_path(&mut self, path: &BezPath, style: &DomainStyle) {
        (**self).draw_path(path, style);
    }

    fn begin_ticks(&mut self, stroke: &StrokeStyle, label: &LabelStyle) {
        (**self).begin_ticks(stroke, label);
    }

    fn draw_line(&mut self, line: Line) {
        (**self).draw_line(line);
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        (**self).draw_text(text, origin);
    }
}
