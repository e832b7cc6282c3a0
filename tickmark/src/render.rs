// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-free drawing of the baseline and tick marks.

use kurbo::BezPath;

use crate::axis::AxisSpec;
use crate::orient::AxisDirection;
use crate::plan::TickPlan;
use crate::target::DrawTarget;

/// The baseline as an open path with end caps pointing away from the plot.
///
/// For a horizontal axis this runs from `(r0, sign * outer)` to `(r0, 0)`, along to `(r1, 0)`
/// and out to `(r1, sign * outer)`. Vertical axes use the transposed points.
pub fn baseline_path(direction: AxisDirection, outer_tick_size: f64, range: (f64, f64)) -> BezPath {
    let cap = direction.sign() * outer_tick_size;
    let (r0, r1) = range;
    let mut path = BezPath::new();
    path.move_to(direction.point(r0, cap));
    path.line_to(direction.point(r0, 0.0));
    path.line_to(direction.point(r1, 0.0));
    path.line_to(direction.point(r1, cap));
    path
}

/// Draws the baseline for `spec` over `range`, unless the spec hides it.
pub fn draw_baseline<V, T>(target: &mut T, spec: &AxisSpec<V>, range: (f64, f64))
where
    T: DrawTarget + ?Sized,
{
    if !spec.show_domain {
        return;
    }
    let path = baseline_path(spec.orient.direction(), spec.outer_tick_size, range);
    target.draw_path(&path, &spec.domain);
}

/// Draws every tick mark and non-empty label in `plan`, in plan order.
///
/// Ticks whose position is not finite are skipped.
pub fn draw_ticks<V, T>(target: &mut T, plan: &TickPlan<V>)
where
    T: DrawTarget + ?Sized,
{
    log::trace!("drawing {} ticks", plan.ticks.len());
    target.begin_ticks(&plan.stroke, &plan.label);
    for tick in &plan.ticks {
        if !(tick.position.x.is_finite() && tick.position.y.is_finite()) {
            continue;
        }
        target.draw_line(plan.tick_line(tick));
        if !tick.label.is_empty() {
            target.draw_text(&tick.label, plan.label_origin(tick));
        }
    }
}

/// Draws a whole axis: the baseline first, then the ticks of `plan` if the spec shows them.
pub fn draw_axis<V, T>(
    target: &mut T,
    spec: &AxisSpec<V>,
    plan: Option<&TickPlan<V>>,
    range: (f64, f64),
) where
    T: DrawTarget + ?Sized,
{
    draw_baseline(target, spec, range);
    if spec.show_ticks {
        if let Some(plan) = plan {
            draw_ticks(target, plan);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Line, PathEl, Point};

    use super::*;
    use crate::orient::AxisOrient;
    use crate::plan::LabelStyle;
    use crate::scale::{FnScale, ScaleLinear};
    use crate::style::{DomainStyle, StrokeStyle};

    #[derive(Debug, PartialEq)]
    enum Call {
        Path(usize),
        Begin,
        Line(Line),
        Text(String, Point),
    }

    #[derive(Default)]
    struct Log(Vec<Call>);

    impl DrawTarget for Log {
        fn draw_path(&mut self, path: &BezPath, _style: &DomainStyle) {
            self.0.push(Call::Path(path.elements().len()));
        }
        fn begin_ticks(&mut self, _stroke: &StrokeStyle, _label: &LabelStyle) {
            self.0.push(Call::Begin);
        }
        fn draw_line(&mut self, line: Line) {
            self.0.push(Call::Line(line));
        }
        fn draw_text(&mut self, text: &str, origin: Point) {
            self.0.push(Call::Text(String::from(text), origin));
        }
    }

    #[test]
    fn baseline_vertices_per_orientation() {
        let points = |orient: AxisOrient| -> Vec<(f64, f64)> {
            baseline_path(orient.direction(), 6.0, (0.0, 300.0))
                .elements()
                .iter()
                .map(|el| match el {
                    PathEl::MoveTo(p) | PathEl::LineTo(p) => (p.x, p.y),
                    _ => panic!("unexpected element {el:?}"),
                })
                .collect()
        };
        assert_eq!(
            points(AxisOrient::Bottom),
            [(0.0, 6.0), (0.0, 0.0), (300.0, 0.0), (300.0, 6.0)]
        );
        assert_eq!(
            points(AxisOrient::Top),
            [(0.0, -6.0), (0.0, 0.0), (300.0, 0.0), (300.0, -6.0)]
        );
        assert_eq!(
            points(AxisOrient::Left),
            [(-6.0, 0.0), (0.0, 0.0), (0.0, 300.0), (-6.0, 300.0)]
        );
        assert_eq!(
            points(AxisOrient::Right),
            [(6.0, 0.0), (0.0, 0.0), (0.0, 300.0), (6.0, 300.0)]
        );
    }

    #[test]
    fn baseline_then_ticks() {
        let scale = ScaleLinear::new((0.0, 1.0), (0.0, 100.0));
        let spec = AxisSpec::bottom().with_tick_values(vec![0.0, 1.0]);
        let plan = spec.tick_plan(&scale).unwrap();
        let mut log = Log::default();
        draw_axis(&mut log, &spec, Some(&plan), (0.0, 100.0));
        assert_eq!(
            log.0,
            [
                Call::Path(4),
                Call::Begin,
                Call::Line(Line::new((0.0, 0.0), (0.0, 6.0))),
                Call::Text(String::from("0.0"), Point::new(0.0, 9.0)),
                Call::Line(Line::new((100.0, 0.0), (100.0, 6.0))),
                Call::Text(String::from("1.0"), Point::new(100.0, 9.0)),
            ]
        );
    }

    #[test]
    fn flags_are_independent() {
        let scale = ScaleLinear::new((0.0, 1.0), (0.0, 100.0));
        let spec = AxisSpec::left().with_tick_values(vec![0.5]);
        let plan = spec.tick_plan(&scale).unwrap();

        let mut domain_only = Log::default();
        draw_axis(
            &mut domain_only,
            &spec.clone().with_ticks(false),
            Some(&plan),
            (0.0, 100.0),
        );
        assert_eq!(domain_only.0, [Call::Path(4)]);

        let mut ticks_only = Log::default();
        draw_axis(
            &mut ticks_only,
            &spec.with_domain(false),
            Some(&plan),
            (0.0, 100.0),
        );
        assert_eq!(ticks_only.0.len(), 3);
        assert_eq!(ticks_only.0[0], Call::Begin);
    }

    #[test]
    fn suppressed_labels_and_unmapped_ticks_draw_nothing_extra() {
        let scale = FnScale::new(|v: &f64| if *v < 0.0 { f64::NAN } else { *v });
        let spec = AxisSpec::bottom()
            .with_tick_values(vec![-1.0, 2.0])
            .with_tick_format(|_: &f64| String::new());
        let plan = spec.tick_plan(&scale).unwrap();
        let mut log = Log::default();
        draw_ticks(&mut log, &plan);
        assert_eq!(
            log.0,
            [Call::Begin, Call::Line(Line::new((2.0, 0.0), (2.0, 6.0)))]
        );
    }
}
