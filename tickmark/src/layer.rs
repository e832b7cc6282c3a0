// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host hooks.
//!
//! A chart host decides when an axis is redrawn (first render, pan, zoom, new data). It
//! hands an [`AxisLayer`] its current props and an [`AxisGeometry`] snapshot, and the layer
//! resolves the scale, computes ticks and draws through one of the two backends.

use core::fmt;

use kurbo::Vec2;

use crate::axis::AxisSpec;
use crate::canvas::{CanvasContext, CanvasTarget};
use crate::error::AxisError;
use crate::plan::TickPlan;
use crate::render::draw_axis;
use crate::scale::Scale;
use crate::svg::{SvgNode, SvgTarget};

/// Where the axis goes: the origin translation and the baseline's pixel extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGeometry {
    /// Translation applied before drawing.
    pub transform: Vec2,
    /// Start and end of the baseline along the axis dimension.
    pub range: (f64, f64),
}

impl AxisGeometry {
    /// Creates a geometry snapshot.
    pub fn new(transform: impl Into<Vec2>, range: (f64, f64)) -> Self {
        Self {
            transform: transform.into(),
            range,
        }
    }

    /// Rejects NaN or infinite components.
    pub fn validate(&self) -> Result<(), AxisError> {
        let checks = [
            ("transform.x", self.transform.x),
            ("transform.y", self.transform.y),
            ("range.start", self.range.0),
            ("range.end", self.range.1),
        ];
        for (field, value) in checks {
            if !value.is_finite() {
                log::warn!("rejecting axis geometry: {field} is {value}");
                return Err(AxisError::NonFiniteGeometry { field });
            }
        }
        Ok(())
    }
}

/// An axis bound to a scale resolver.
///
/// `resolve_scale` is called with the host's props at draw time, and only when ticks are
/// shown; the baseline needs no scale.
pub struct AxisLayer<V, R> {
    spec: AxisSpec<V>,
    resolve_scale: R,
}

impl<V: fmt::Debug, R> fmt::Debug for AxisLayer<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisLayer")
            .field("spec", &self.spec)
            .field("resolve_scale", &"<fn>")
            .finish()
    }
}

impl<V, R> AxisLayer<V, R> {
    /// Binds `spec` to a scale resolver.
    pub fn new(spec: AxisSpec<V>, resolve_scale: R) -> Self {
        Self {
            spec,
            resolve_scale,
        }
    }

    /// The axis configuration.
    pub fn spec(&self) -> &AxisSpec<V> {
        &self.spec
    }

    /// Replaces the axis configuration, keeping the resolver.
    pub fn set_spec(&mut self, spec: AxisSpec<V>) {
        self.spec = spec;
    }
}

impl<V: Clone + fmt::Display, R> AxisLayer<V, R> {
    fn plan<P, S>(&self, props: &P) -> Result<Option<TickPlan<V>>, AxisError>
    where
        R: Fn(&P) -> S,
        S: Scale<Value = V>,
    {
        if !self.spec.show_ticks {
            return Ok(None);
        }
        let scale = (self.resolve_scale)(props);
        self.spec.tick_plan(&scale).map(Some)
    }

    /// Builds the retained SVG subtree for this axis.
    ///
    /// The result is a group carrying the spec's class and a `translate` to the geometry's
    /// origin, containing the baseline followed by the ticks.
    pub fn render_svg<P, S>(&self, props: &P, geometry: &AxisGeometry) -> Result<SvgNode, AxisError>
    where
        R: Fn(&P) -> S,
        S: Scale<Value = V>,
    {
        geometry.validate()?;
        let plan = self.plan(props)?;
        let mut target = SvgTarget::new();
        draw_axis(&mut target, &self.spec, plan.as_ref(), geometry.range);
        Ok(target.into_group(self.spec.class_name.clone(), geometry.transform))
    }

    /// Draws this axis onto a canvas context.
    ///
    /// Errors are reported before the context is touched; on success the context state is
    /// restored to what it was before the call.
    pub fn draw_on_canvas<P, S, C>(
        &self,
        ctx: &mut C,
        props: &P,
        geometry: &AxisGeometry,
    ) -> Result<(), AxisError>
    where
        R: Fn(&P) -> S,
        S: Scale<Value = V>,
        C: CanvasContext + ?Sized,
    {
        geometry.validate()?;
        let plan = self.plan(props)?;
        let mut target = CanvasTarget::new(ctx, geometry.transform);
        draw_axis(&mut target, &self.spec, plan.as_ref(), geometry.range);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::*;
    use crate::canvas::{CanvasCommand, RecordingContext};
    use crate::scale::{FnScale, ScaleLinear};

    struct Viewport {
        zoom: f64,
    }

    #[test]
    fn resolver_sees_current_props() {
        let layer = AxisLayer::new(AxisSpec::<f64>::bottom().with_tick_count(2), |p: &Viewport| {
            ScaleLinear::new((0.0, 10.0), (0.0, 100.0 * p.zoom))
        });
        let geometry = AxisGeometry::new((0.0, 50.0), (0.0, 100.0));

        let props = Viewport { zoom: 2.0 };
        let node = layer.render_svg(&props, &geometry).unwrap();
        let SvgNode::Group { children, .. } = node else {
            panic!("expected a group");
        };
        let xs: Vec<f64> = children
            .iter()
            .filter_map(|n| match n {
                SvgNode::Line { line, .. } => Some(line.p0.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, [0.0, 100.0, 200.0]);
    }

    #[test]
    fn hidden_ticks_skip_the_resolver() {
        let calls = Cell::new(0);
        let layer = AxisLayer::new(AxisSpec::<f64>::left().with_ticks(false), |_: &()| {
            calls.set(calls.get() + 1);
            FnScale::new(|v: &f64| *v)
        });
        let geometry = AxisGeometry::new((40.0, 0.0), (0.0, 200.0));

        let node = layer.render_svg(&(), &geometry).unwrap();
        let mut ctx = RecordingContext::new();
        layer.draw_on_canvas(&mut ctx, &(), &geometry).unwrap();

        assert_eq!(calls.get(), 0);
        let SvgNode::Group { children, .. } = node else {
            panic!("expected a group");
        };
        assert!(matches!(children.as_slice(), [SvgNode::Path { .. }]));
        assert!(
            !ctx.commands()
                .iter()
                .any(|c| matches!(c, CanvasCommand::FillText(..)))
        );
    }

    #[test]
    fn bad_geometry_fails_before_drawing() {
        let layer = AxisLayer::new(AxisSpec::<f64>::bottom(), |_: &()| {
            ScaleLinear::new((0.0, 1.0), (0.0, 10.0))
        });
        let geometry = AxisGeometry::new((0.0, f64::NAN), (0.0, 10.0));
        let mut ctx = RecordingContext::new();
        assert_eq!(
            layer.draw_on_canvas(&mut ctx, &(), &geometry),
            Err(AxisError::NonFiniteGeometry {
                field: "transform.y"
            })
        );
        assert!(ctx.commands().is_empty());

        let geometry = AxisGeometry::new((0.0, 0.0), (0.0, f64::INFINITY));
        assert_eq!(
            layer.render_svg(&(), &geometry),
            Err(AxisError::NonFiniteGeometry { field: "range.end" })
        );
    }

    #[test]
    fn missing_tick_source_leaves_context_untouched() {
        let layer = AxisLayer::new(AxisSpec::<f64>::bottom(), |_: &()| {
            FnScale::new(|v: &f64| *v)
        });
        let geometry = AxisGeometry::new((0.0, 0.0), (0.0, 1.0));
        let mut ctx = RecordingContext::new();
        let result = layer.draw_on_canvas(&mut ctx, &(), &geometry);
        assert_eq!(result, Err(AxisError::NoTickSource));
        assert!(ctx.commands().is_empty());
    }
}
