// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-backend checks: every placement, both renderers, one tick plan.

use kurbo::{Line, Point};
use peniko::Color;
use rstest::rstest;
use tickmark::{
    AxisError, AxisGeometry, AxisLayer, AxisOrient, AxisSpec, CanvasCommand, FnScale,
    RecordingContext, ScaleBand, ScaleLinear, ScaleLog, SvgNode, baseline_path, svg_path_data,
};

const EPS: f64 = 1e-9;

#[derive(Debug)]
struct Segment {
    line: Line,
    stroke_style: String,
    line_width: f64,
}

#[derive(Debug)]
struct Label {
    text: String,
    /// Final glyph baseline origin, shift included.
    at: Point,
    fill: String,
    font: String,
}

fn svg_parts(node: &SvgNode) -> (Vec<Segment>, Vec<Label>) {
    let SvgNode::Group { children, .. } = node else {
        panic!("expected the axis group, got {node:?}");
    };
    let mut segments = Vec::new();
    let mut labels = Vec::new();
    for child in children {
        match child {
            SvgNode::Line { line, stroke } => segments.push(Segment {
                line: *line,
                stroke_style: stroke.css_rgba(),
                line_width: stroke.width,
            }),
            SvgNode::Text {
                text,
                origin,
                dy,
                font,
                fill,
                ..
            } => {
                let rgba = fill.to_rgba8();
                labels.push(Label {
                    text: text.clone(),
                    at: Point::new(origin.x, origin.y + dy.to_pixels(font.font_size)),
                    fill: format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
                    font: font.css_font(),
                });
            }
            SvgNode::Path { .. } => {}
            SvgNode::Group { .. } => panic!("unexpected nested group"),
        }
    }
    (segments, labels)
}

fn canvas_parts(commands: &[CanvasCommand]) -> (Vec<Segment>, Vec<Label>) {
    let mut segments = Vec::new();
    let mut labels = Vec::new();
    let mut stroke_style = String::new();
    let mut line_width = 0.0;
    let mut fill = String::new();
    let mut font = String::new();
    let mut points = Vec::new();
    for command in commands {
        match command {
            CanvasCommand::StrokeStyle(s) => stroke_style.clone_from(s),
            CanvasCommand::LineWidth(w) => line_width = *w,
            CanvasCommand::FillStyle(s) => fill.clone_from(s),
            CanvasCommand::Font(s) => font.clone_from(s),
            CanvasCommand::BeginPath => points.clear(),
            CanvasCommand::MoveTo(x, y) | CanvasCommand::LineTo(x, y) => {
                points.push(Point::new(*x, *y));
            }
            CanvasCommand::Stroke if points.len() == 2 => segments.push(Segment {
                line: Line::new(points[0], points[1]),
                stroke_style: stroke_style.clone(),
                line_width,
            }),
            CanvasCommand::FillText(text, x, y) => labels.push(Label {
                text: text.clone(),
                at: Point::new(*x, *y),
                fill: fill.clone(),
                font: font.clone(),
            }),
            _ => {}
        }
    }
    (segments, labels)
}

/// The value of attribute `name` on one serialized element.
fn attr<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = element.find(&key)? + key.len();
    let len = element[start..].find('"')?;
    Some(&element[start..start + len])
}

fn number_attr(element: &str, name: &str) -> Option<f64> {
    attr(element, name).map(|v| v.parse().unwrap())
}

/// `[r, g, b, a]` of an `rgba(r, g, b, a)` canvas style.
fn rgba_channels(css: &str) -> [f64; 4] {
    let inner = css
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or_else(|| panic!("not an rgba() style: {css}"));
    let v: Vec<f64> = inner.split(", ").map(|c| c.parse().unwrap()).collect();
    [v[0], v[1], v[2], v[3]]
}

/// Tick lines read back from serialized markup, paint folded to `[r, g, b, a]` the way a
/// browser composes `stroke`, `stroke-opacity` and `opacity`.
fn serialized_lines(markup: &str) -> Vec<(Line, [f64; 4], f64)> {
    markup
        .lines()
        .map(str::trim_start)
        .filter(|el| el.starts_with("<line "))
        .map(|el| {
            let n = |name| number_attr(el, name).unwrap_or_else(|| panic!("no {name}: {el}"));
            let hex = attr(el, "stroke").unwrap_or_else(|| panic!("no stroke: {el}"));
            let channel = |i: usize| f64::from(u8::from_str_radix(&hex[i..i + 2], 16).unwrap());
            let alpha = number_attr(el, "stroke-opacity").unwrap_or(1.0)
                * number_attr(el, "opacity").unwrap_or(1.0);
            let line = Line::new((n("x1"), n("y1")), (n("x2"), n("y2")));
            let paint = [channel(1), channel(3), channel(5), alpha];
            (line, paint, n("stroke-width"))
        })
        .collect()
}

fn assert_close(a: Point, b: Point, what: &str) {
    assert!(
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
        "{what}: {a:?} != {b:?}"
    );
}

fn linear_layer(spec: AxisSpec<f64>) -> AxisLayer<f64, impl Fn(&f64) -> ScaleLinear> {
    AxisLayer::new(spec, |width: &f64| {
        ScaleLinear::new((-0.7, 3.29), (0.0, *width))
    })
}

#[rstest]
#[case(AxisOrient::Top, -1.0, true)]
#[case(AxisOrient::Bottom, 1.0, true)]
#[case(AxisOrient::Left, -1.0, false)]
#[case(AxisOrient::Right, 1.0, false)]
fn orientation_table(#[case] orient: AxisOrient, #[case] sign: f64, #[case] horizontal: bool) {
    assert_eq!(orient.sign(), sign);
    assert_eq!(orient.is_horizontal(), horizontal);
    let direction = orient.direction();
    assert_eq!(direction.sign(), sign);
    assert_eq!(direction.is_horizontal(), horizontal);
}

#[rstest]
#[case(AxisOrient::Bottom, "M0,6V0H300V6")]
#[case(AxisOrient::Top, "M0,-6V0H300V-6")]
#[case(AxisOrient::Left, "M-6,0H0V300H-6")]
#[case(AxisOrient::Right, "M6,0H0V300H6")]
fn baseline_path_data(#[case] orient: AxisOrient, #[case] expected: &str) {
    assert_eq!(
        svg_path_data(&baseline_path(orient.direction(), 6.0, (0.0, 300.0))),
        expected
    );
}

#[rstest]
#[case(AxisOrient::Top)]
#[case(AxisOrient::Bottom)]
#[case(AxisOrient::Left)]
#[case(AxisOrient::Right)]
fn explicit_tick_positions(#[case] orient: AxisOrient) {
    let scale = ScaleLinear::new((0.0, 100.0), (0.0, 500.0));
    let plan = AxisSpec::new(orient)
        .with_tick_values(vec![0.0, 50.0, 100.0])
        .tick_plan(&scale)
        .unwrap();
    let (along, cross): (Vec<f64>, Vec<f64>) = plan
        .ticks
        .iter()
        .map(|t| {
            if orient.is_horizontal() {
                (t.position.x, t.position.y)
            } else {
                (t.position.y, t.position.x)
            }
        })
        .unzip();
    assert_eq!(along, [0.0, 250.0, 500.0]);
    assert_eq!(cross, [0.0, 0.0, 0.0]);
}

#[rstest]
#[case(AxisOrient::Top)]
#[case(AxisOrient::Bottom)]
#[case(AxisOrient::Left)]
#[case(AxisOrient::Right)]
fn backends_agree(#[case] orient: AxisOrient) {
    let spec = AxisSpec::new(orient)
        .with_tick_count(6)
        .with_font_size(11.0)
        .with_font_family("Helvetica Neue, sans-serif")
        .with_tick_stroke(Color::from_rgba8(0x80, 0x20, 0x10, 0xcc), 0.75)
        .with_tick_padding(4.0);
    let layer = linear_layer(spec);
    let geometry = AxisGeometry::new((30.0, 40.0), (0.0, 400.0));

    let svg = layer.render_svg(&400.0, &geometry).unwrap();
    let mut ctx = RecordingContext::new();
    layer.draw_on_canvas(&mut ctx, &400.0, &geometry).unwrap();

    let (svg_segments, svg_labels) = svg_parts(&svg);
    let (canvas_segments, canvas_labels) = canvas_parts(ctx.commands());

    assert!(!svg_segments.is_empty(), "no ticks drawn for {orient:?}");
    assert_eq!(svg_segments.len(), canvas_segments.len());
    for (s, c) in svg_segments.iter().zip(&canvas_segments) {
        assert_close(s.line.p0, c.line.p0, "tick start");
        assert_close(s.line.p1, c.line.p1, "tick end");
        assert_eq!(s.stroke_style, c.stroke_style);
        assert_eq!(s.line_width, c.line_width);
    }

    // The markup itself must paint what the canvas paints.
    let written = serialized_lines(&svg.to_svg_string());
    assert_eq!(written.len(), canvas_segments.len());
    for ((line, paint, width), c) in written.iter().zip(&canvas_segments) {
        assert_close(line.p0, c.line.p0, "serialized tick start");
        assert_close(line.p1, c.line.p1, "serialized tick end");
        let expected = rgba_channels(&c.stroke_style);
        for (w, e) in paint.iter().zip(expected) {
            assert!((w - e).abs() < 1e-6, "{paint:?} != {expected:?}");
        }
        assert_eq!(*width, c.line_width);
    }

    assert_eq!(svg_labels.len(), canvas_labels.len());
    for (s, c) in svg_labels.iter().zip(&canvas_labels) {
        assert_eq!(s.text, c.text);
        assert_close(s.at, c.at, &s.text);
        assert_eq!(s.fill, c.fill);
        assert_eq!(s.font, c.font);
    }
}

#[rstest]
#[case(AxisOrient::Top)]
#[case(AxisOrient::Left)]
fn both_backends_translate_to_the_same_origin(#[case] orient: AxisOrient) {
    let layer = linear_layer(AxisSpec::new(orient));
    let geometry = AxisGeometry::new((12.5, -3.0), (0.0, 100.0));

    let SvgNode::Group { transform, .. } = layer.render_svg(&100.0, &geometry).unwrap() else {
        panic!("expected a group");
    };
    let mut ctx = RecordingContext::new();
    layer.draw_on_canvas(&mut ctx, &100.0, &geometry).unwrap();

    assert_eq!(transform, Some(geometry.transform));
    assert_eq!(ctx.commands()[1], CanvasCommand::Translate(12.5, -3.0));
    assert_eq!(ctx.commands().last(), Some(&CanvasCommand::Restore));
}

#[test]
fn plans_are_idempotent() {
    let scale = ScaleLog::new((1.0, 1000.0), (300.0, 0.0));
    let spec = AxisSpec::left().with_tick_format(|v: &f64| format!("{v}ms"));
    let first = spec.tick_plan(&scale).unwrap();
    let second = spec.tick_plan(&scale).unwrap();
    assert_eq!(first, second);

    let layer = AxisLayer::new(spec, move |_: &()| scale);
    let geometry = AxisGeometry::new((0.0, 0.0), (300.0, 0.0));
    assert_eq!(
        layer.render_svg(&(), &geometry).unwrap().to_svg_string(),
        layer.render_svg(&(), &geometry).unwrap().to_svg_string()
    );
}

#[test]
fn suppressed_labels_stay_suppressed() {
    let scale = ScaleLog::new((1.0, 1000.0), (0.0, 300.0));
    let plan = AxisSpec::bottom()
        .with_tick_format(|v: &f64| format!("{v:.1}"))
        .tick_plan(&scale)
        .unwrap();
    let blank: Vec<f64> = plan
        .ticks
        .iter()
        .filter(|t| t.label.is_empty())
        .map(|t| t.value)
        .collect();
    assert!(
        blank.contains(&5.0),
        "5 should be unlabeled, blank = {blank:?}"
    );
    assert!(
        blank.contains(&700.0),
        "700 should be unlabeled, blank = {blank:?}"
    );
    assert!(
        plan.ticks
            .iter()
            .any(|t| t.value == 100.0 && t.label == "100.0"),
        "100 should use the override"
    );
}

#[test]
fn hidden_ticks_leave_only_the_baseline() {
    let layer = linear_layer(AxisSpec::bottom().with_ticks(false));
    let geometry = AxisGeometry::new((0.0, 0.0), (0.0, 300.0));

    let svg = layer.render_svg(&300.0, &geometry).unwrap();
    let SvgNode::Group { children, .. } = &svg else {
        panic!("expected a group");
    };
    assert_eq!(children.len(), 1);
    assert!(matches!(children[0], SvgNode::Path { .. }));

    let mut ctx = RecordingContext::new();
    layer.draw_on_canvas(&mut ctx, &300.0, &geometry).unwrap();
    let strokes = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, CanvasCommand::Stroke))
        .count();
    assert_eq!(strokes, 1);
    assert!(
        !ctx.commands()
            .iter()
            .any(|c| matches!(c, CanvasCommand::FillText(..) | CanvasCommand::Font(_)))
    );
}

#[test]
fn hidden_domain_leaves_only_ticks() {
    let scale = ScaleBand::new(["north", "south", "east", "west"], (0.0, 400.0));
    let layer = AxisLayer::new(AxisSpec::<String>::top().with_domain(false), move |_: &()| {
        scale.clone()
    });
    let svg = layer
        .render_svg(&(), &AxisGeometry::new((0.0, 20.0), (0.0, 400.0)))
        .unwrap();
    let SvgNode::Group { children, .. } = &svg else {
        panic!("expected a group");
    };
    assert!(!children.iter().any(|c| matches!(c, SvgNode::Path { .. })));
    assert_eq!(children.len(), 8);
}

#[test]
fn scale_without_ticks_or_domain_is_rejected() {
    let layer = AxisLayer::new(AxisSpec::<f64>::right(), |_: &()| {
        FnScale::new(|v: &f64| v * 3.0)
    });
    let geometry = AxisGeometry::new((0.0, 0.0), (0.0, 10.0));
    assert_eq!(
        layer.render_svg(&(), &geometry),
        Err(AxisError::NoTickSource)
    );

    let mut ctx = RecordingContext::new();
    assert_eq!(
        layer.draw_on_canvas(&mut ctx, &(), &geometry),
        Err(AxisError::NoTickSource)
    );
    assert!(ctx.commands().is_empty());
}

#[rstest]
#[case((f64::NAN, 0.0), (0.0, 10.0), "transform.x")]
#[case((0.0, 0.0), (f64::NEG_INFINITY, 10.0), "range.start")]
fn non_finite_geometry_is_rejected(
    #[case] transform: (f64, f64),
    #[case] range: (f64, f64),
    #[case] field: &'static str,
) {
    let layer = linear_layer(AxisSpec::bottom());
    let geometry = AxisGeometry::new(transform, range);
    assert_eq!(
        layer.render_svg(&10.0, &geometry),
        Err(AxisError::NonFiniteGeometry { field })
    );
}
