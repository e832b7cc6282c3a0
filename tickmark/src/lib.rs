// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axes that draw the same on SVG and on a 2D canvas.
//!
//! An axis is the ruled baseline, the tick marks and the tick labels along one edge of a
//! plot. This crate splits drawing one into three steps:
//! - **Orientation**: [`AxisOrient`] resolves to an [`AxisDirection`], a family
//!   (horizontal/vertical) plus the sign that points ticks away from the plot.
//! - **Tick geometry**: [`compute_tick_plan`] asks a [`Scale`] for tick values, positions
//!   and labels and produces a backend-agnostic [`TickPlan`].
//! - **Rendering**: [`draw_axis`] replays the baseline and the plan through a
//!   [`DrawTarget`]. [`SvgTarget`] builds a retained [`SvgNode`] tree; [`CanvasTarget`]
//!   issues calls against any [`CanvasContext`].
//!
//! Hosts that own a redraw loop usually go through [`AxisLayer`], which resolves the scale at
//! draw time and wraps both backends behind `render_svg` / `draw_on_canvas`.
//!
//! ```
//! use tickmark::{AxisGeometry, AxisLayer, AxisSpec, RecordingContext, ScaleLinear};
//!
//! let layer = AxisLayer::new(AxisSpec::<f64>::bottom().with_tick_count(5), |_: &()| {
//!     ScaleLinear::new((0.0, 100.0), (0.0, 300.0))
//! });
//! let geometry = AxisGeometry::new((0.0, 200.0), (0.0, 300.0));
//!
//! let svg = layer.render_svg(&(), &geometry).unwrap().to_svg_string();
//! assert!(svg.contains(r#"d="M0,6V0H300V6""#));
//!
//! let mut ctx = RecordingContext::new();
//! layer.draw_on_canvas(&mut ctx, &(), &geometry).unwrap();
//! assert!(!ctx.commands().is_empty());
//! ```
//!
//! Label measurement goes through [`TextMeasurer`] from `tickmark_text`, which is re-exported
//! here along with the text types used in the public API.

#![no_std]

extern crate alloc;

mod axis;
mod canvas;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layer;
mod orient;
mod plan;
mod render;
mod scale;
mod style;
mod svg;
mod target;

pub use axis::AxisSpec;
pub use canvas::{CanvasCommand, CanvasContext, CanvasTarget, PaintState, RecordingContext};
pub use error::AxisError;
pub use format::{format_number, format_tick_with_step};
pub use layer::{AxisGeometry, AxisLayer};
pub use orient::{AxisDirection, AxisOrient};
pub use plan::{
    BOTTOM_LABEL_SHIFT, LabelStyle, TOP_LABEL_SHIFT, Tick, TickPlan, VERTICAL_LABEL_SHIFT,
    compute_tick_plan,
};
pub use render::{baseline_path, draw_axis, draw_baseline, draw_ticks};
pub use scale::{
    DEFAULT_TICK_COUNT, FnScale, Scale, ScaleBand, ScaleLinear, ScaleLog, ScalePoint,
    TickFormatter,
};
pub use style::{DomainStyle, ShapeRendering, StrokeStyle};
pub use svg::{SvgNode, SvgTarget, svg_path_data};
pub use target::DrawTarget;

pub use tickmark_text::{
    BaselineShift, FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, TextAnchor,
    TextMeasurer, TextMetrics, TextStyle,
};
