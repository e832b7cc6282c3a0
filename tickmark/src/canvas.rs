// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immediate-mode 2D canvas backend.
//!
//! The canvas API keeps paint state (stroke style, font, alignment, ...) on the context
//! itself. [`CanvasTarget`] owns that mutation for the length of one draw pass: it saves and
//! translates the context on creation, sets a [`PaintState`] once per pass rather than per
//! tick, and restores the context when dropped.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Line, PathEl, Point, Vec2};

use crate::format::format_number;
use crate::plan::LabelStyle;
use crate::style::{DomainStyle, StrokeStyle, css_hex};
use crate::target::DrawTarget;

/// The subset of the HTML canvas 2D context an axis draws with.
pub trait CanvasContext {
    /// Pushes the current state.
    fn save(&mut self);
    /// Pops the most recently saved state.
    fn restore(&mut self);
    /// Moves the origin.
    fn translate(&mut self, x: f64, y: f64);
    /// Sets `strokeStyle` to a CSS color.
    fn set_stroke_style(&mut self, style: &str);
    /// Sets `fillStyle` to a CSS color.
    fn set_fill_style(&mut self, style: &str);
    /// Sets `lineWidth`.
    fn set_line_width(&mut self, width: f64);
    /// Sets `font` to a CSS font shorthand.
    fn set_font(&mut self, font: &str);
    /// Sets `textAlign`.
    fn set_text_align(&mut self, align: &str);
    /// Starts a new path.
    fn begin_path(&mut self);
    /// Starts a subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);
    /// Adds a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Adds a quadratic segment.
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    /// Adds a cubic segment.
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    /// Closes the current subpath.
    fn close_path(&mut self);
    /// Strokes the current path.
    fn stroke(&mut self);
    /// Fills `text` with its origin at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Context paint state applied at the start of a draw pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintState {
    /// `strokeStyle`, with opacity folded into the alpha.
    pub stroke_style: String,
    /// `lineWidth`.
    pub line_width: f64,
    /// `fillStyle`, if the pass draws text.
    pub fill_style: Option<String>,
    /// `font`, if the pass draws text.
    pub font: Option<String>,
    /// `textAlign`, if the pass draws text.
    pub text_align: Option<&'static str>,
}

impl PaintState {
    /// Paint state for stroking the baseline.
    pub fn for_baseline(style: &DomainStyle) -> Self {
        Self {
            stroke_style: style.stroke.css_rgba(),
            line_width: style.stroke.width,
            fill_style: None,
            font: None,
            text_align: None,
        }
    }

    /// Paint state for a tick pass.
    pub fn for_ticks(stroke: &StrokeStyle, label: &LabelStyle) -> Self {
        Self {
            stroke_style: stroke.css_rgba(),
            line_width: stroke.width,
            fill_style: Some(css_hex(label.fill)),
            font: Some(label.font.css_font()),
            text_align: Some(label.anchor.canvas_align()),
        }
    }

    /// Sets every property this state carries on `ctx`.
    pub fn apply<C: CanvasContext + ?Sized>(&self, ctx: &mut C) {
        ctx.set_stroke_style(&self.stroke_style);
        ctx.set_line_width(self.line_width);
        if let Some(fill) = &self.fill_style {
            ctx.set_fill_style(fill);
        }
        if let Some(font) = &self.font {
            ctx.set_font(font);
        }
        if let Some(align) = self.text_align {
            ctx.set_text_align(align);
        }
    }
}

/// A [`DrawTarget`] over a [`CanvasContext`], scoped to one draw pass.
///
/// Creating it saves the context and translates to the axis origin; dropping it restores the
/// context, so the host's state survives early returns too.
pub struct CanvasTarget<'a, C: CanvasContext + ?Sized> {
    ctx: &'a mut C,
    label_shift: f64,
}

impl<'a, C: CanvasContext + ?Sized> CanvasTarget<'a, C> {
    /// Saves `ctx` and moves its origin by `transform`.
    pub fn new(ctx: &'a mut C, transform: Vec2) -> Self {
        ctx.save();
        ctx.translate(transform.x, transform.y);
        Self {
            ctx,
            label_shift: 0.0,
        }
    }
}

impl<C: CanvasContext + ?Sized> fmt::Debug for CanvasTarget<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasTarget")
            .field("label_shift", &self.label_shift)
            .finish_non_exhaustive()
    }
}

impl<C: CanvasContext + ?Sized> Drop for CanvasTarget<'_, C> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}

impl<C: CanvasContext + ?Sized> DrawTarget for CanvasTarget<'_, C> {
    fn draw_path(&mut self, path: &BezPath, style: &DomainStyle) {
        log::trace!("canvas: baseline with {} elements", path.elements().len());
        PaintState::for_baseline(style).apply(&mut *self.ctx);
        self.ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => self.ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
                PathEl::CurveTo(c1, c2, p) => {
                    self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
                }
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
        self.ctx.stroke();
    }

    fn begin_ticks(&mut self, stroke: &StrokeStyle, label: &LabelStyle) {
        PaintState::for_ticks(stroke, label).apply(&mut *self.ctx);
        self.label_shift = label.baseline_shift.to_pixels(label.font.font_size);
    }

    fn draw_line(&mut self, line: Line) {
        self.ctx.begin_path();
        self.ctx.move_to(line.p0.x, line.p0.y);
        self.ctx.line_to(line.p1.x, line.p1.y);
        self.ctx.stroke();
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        self.ctx
            .fill_text(text, origin.x, origin.y + self.label_shift);
    }
}

/// One recorded [`CanvasContext`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasCommand {
    /// `save()`
    Save,
    /// `restore()`
    Restore,
    /// `translate(x, y)`
    Translate(f64, f64),
    /// `strokeStyle = ...`
    StrokeStyle(String),
    /// `fillStyle = ...`
    FillStyle(String),
    /// `lineWidth = ...`
    LineWidth(f64),
    /// `font = ...`
    Font(String),
    /// `textAlign = ...`
    TextAlign(String),
    /// `beginPath()`
    BeginPath,
    /// `moveTo(x, y)`
    MoveTo(f64, f64),
    /// `lineTo(x, y)`
    LineTo(f64, f64),
    /// `quadraticCurveTo(cx, cy, x, y)`
    QuadraticCurveTo(f64, f64, f64, f64),
    /// `bezierCurveTo(c1x, c1y, c2x, c2y, x, y)`
    BezierCurveTo(f64, f64, f64, f64, f64, f64),
    /// `closePath()`
    ClosePath,
    /// `stroke()`
    Stroke,
    /// `fillText(text, x, y)`
    FillText(String, f64, f64),
}

impl fmt::Display for CanvasCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = format_number;
        match self {
            Self::Save => f.write_str("save()"),
            Self::Restore => f.write_str("restore()"),
            Self::Translate(x, y) => write!(f, "translate({}, {})", n(*x), n(*y)),
            Self::StrokeStyle(s) => write!(f, "strokeStyle = {s:?}"),
            Self::FillStyle(s) => write!(f, "fillStyle = {s:?}"),
            Self::LineWidth(w) => write!(f, "lineWidth = {}", n(*w)),
            Self::Font(s) => write!(f, "font = {s:?}"),
            Self::TextAlign(s) => write!(f, "textAlign = {s:?}"),
            Self::BeginPath => f.write_str("beginPath()"),
            Self::MoveTo(x, y) => write!(f, "moveTo({}, {})", n(*x), n(*y)),
            Self::LineTo(x, y) => write!(f, "lineTo({}, {})", n(*x), n(*y)),
            Self::QuadraticCurveTo(cx, cy, x, y) => write!(
                f,
                "quadraticCurveTo({}, {}, {}, {})",
                n(*cx),
                n(*cy),
                n(*x),
                n(*y)
            ),
            Self::BezierCurveTo(c1x, c1y, c2x, c2y, x, y) => write!(
                f,
                "bezierCurveTo({}, {}, {}, {}, {}, {})",
                n(*c1x),
                n(*c1y),
                n(*c2x),
                n(*c2y),
                n(*x),
                n(*y)
            ),
            Self::ClosePath => f.write_str("closePath()"),
            Self::Stroke => f.write_str("stroke()"),
            Self::FillText(text, x, y) => write!(f, "fillText({text:?}, {}, {})", n(*x), n(*y)),
        }
    }
}

/// A [`CanvasContext`] that records calls instead of drawing.
///
/// Useful for headless hosts and for checking draw output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingContext {
    commands: Vec<CanvasCommand>,
}

impl RecordingContext {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The calls recorded so far.
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Consumes the recorder, returning its calls.
    pub fn into_commands(self) -> Vec<CanvasCommand> {
        self.commands
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl CanvasContext for RecordingContext {
    fn save(&mut self) {
        self.commands.push(CanvasCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(CanvasCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::Translate(x, y));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.commands
            .push(CanvasCommand::StrokeStyle(String::from(style)));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.commands
            .push(CanvasCommand::FillStyle(String::from(style)));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(CanvasCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(CanvasCommand::Font(String::from(font)));
    }

    fn set_text_align(&mut self, align: &str) {
        self.commands
            .push(CanvasCommand::TextAlign(String::from(align)));
    }

    fn begin_path(&mut self) {
        self.commands.push(CanvasCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::LineTo(x, y));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands
            .push(CanvasCommand::QuadraticCurveTo(cx, cy, x, y));
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.commands
            .push(CanvasCommand::BezierCurveTo(c1x, c1y, c2x, c2y, x, y));
    }

    fn close_path(&mut self) {
        self.commands.push(CanvasCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(CanvasCommand::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands
            .push(CanvasCommand::FillText(String::from(text), x, y));
    }
}
