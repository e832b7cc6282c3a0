// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis demo for `tickmark`.
//!
//! Lays out a plot with one axis on each edge, each driven by a different kind of scale, and
//! draws it twice: once as an SVG document and once through a recording canvas context.
//! Writes `tickmark_demo.svg` and `tickmark_demo.canvas.txt` to the working directory.

mod logging;

use std::error::Error;
use std::fmt::Write as _;

use kurbo::Vec2;
use peniko::Color;
use tickmark::{
    AxisGeometry, AxisLayer, AxisSpec, FnScale, HeuristicTextMeasurer, RecordingContext,
    ScaleLinear, ScaleLog, ScalePoint, SvgNode, TextMeasurer,
};

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Host props handed to every scale resolver.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    width: f64,
    height: f64,
}

#[derive(Clone, Copy, Debug)]
struct Margins {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging(logging::LoggingConfig::default());

    let viewport = Viewport {
        width: 480.0,
        height: 300.0,
    };
    let measurer = HeuristicTextMeasurer;

    let percent = |vp: &Viewport| ScaleLinear::new((0.0, 97.0), (0.0, vp.width)).nice(5);
    let latency = |vp: &Viewport| ScaleLog::new((1.0, 1000.0), (vp.height, 0.0));
    let month = |vp: &Viewport| ScalePoint::new(MONTHS, (0.0, vp.width));
    let root = |vp: &Viewport| {
        let height = vp.height;
        FnScale::new(move |v: &f64| height * (1.0 - v.sqrt() / 10.0)).with_domain([0.0, 100.0])
    };

    let bottom = AxisLayer::new(
        AxisSpec::bottom()
            .with_tick_count(5)
            .with_tick_format(|v: &f64| format!("{v}%")),
        percent,
    );
    let left = AxisLayer::new(
        AxisSpec::left()
            .with_tick_format(|v: &f64| format!("{v} ms"))
            .with_domain_stroke(Color::from_rgb8(0x55, 0x55, 0x55), 1.5, 0.8),
        latency,
    );
    let top = AxisLayer::new(
        AxisSpec::<String>::top()
            .with_font_family("Georgia, serif")
            .with_tick_stroke(Color::from_rgb8(0x1f, 0x77, 0xb4), 1.0)
            .with_class_name("axis axis-top"),
        month,
    );
    let right = AxisLayer::new(
        AxisSpec::right()
            .with_tick_values([0.0, 1.0, 4.0, 9.0, 25.0, 49.0, 100.0])
            .with_inner_tick_size(4.0)
            .with_outer_tick_size(0.0)
            .with_tick_stroke(Color::from_rgb8(0xd6, 0x27, 0x28), 0.6),
        root,
    );

    let margins = Margins {
        top: thickness(top.spec(), &month(&viewport), &measurer)?,
        right: thickness(right.spec(), &root(&viewport), &measurer)?,
        bottom: thickness(bottom.spec(), &percent(&viewport), &measurer)?,
        left: thickness(left.spec(), &latency(&viewport), &measurer)?,
    };
    log::info!("margins: {margins:?}");

    let origin = Vec2::new(margins.left, margins.top);
    let bottom_geometry = AxisGeometry::new(
        origin + Vec2::new(0.0, viewport.height),
        (0.0, viewport.width),
    );
    let top_geometry = AxisGeometry::new(origin, (0.0, viewport.width));
    let left_geometry = AxisGeometry::new(origin, (0.0, viewport.height));
    let right_geometry = AxisGeometry::new(
        origin + Vec2::new(viewport.width, 0.0),
        (0.0, viewport.height),
    );

    let groups = [
        bottom.render_svg(&viewport, &bottom_geometry)?,
        left.render_svg(&viewport, &left_geometry)?,
        top.render_svg(&viewport, &top_geometry)?,
        right.render_svg(&viewport, &right_geometry)?,
    ];
    let size = Vec2::new(
        margins.left + viewport.width + margins.right,
        margins.top + viewport.height + margins.bottom,
    );
    let svg = svg_document(size, origin, viewport, &groups);
    std::fs::write("tickmark_demo.svg", svg)?;
    log::info!("wrote tickmark_demo.svg");

    let mut ctx = RecordingContext::new();
    bottom.draw_on_canvas(&mut ctx, &viewport, &bottom_geometry)?;
    left.draw_on_canvas(&mut ctx, &viewport, &left_geometry)?;
    top.draw_on_canvas(&mut ctx, &viewport, &top_geometry)?;
    right.draw_on_canvas(&mut ctx, &viewport, &right_geometry)?;
    let mut calls = String::new();
    for command in ctx.commands() {
        writeln!(calls, "ctx.{command};")?;
    }
    std::fs::write("tickmark_demo.canvas.txt", calls)?;
    log::info!(
        "wrote tickmark_demo.canvas.txt ({} calls)",
        ctx.commands().len()
    );

    Ok(())
}

fn thickness<S>(
    spec: &AxisSpec<S::Value>,
    scale: &S,
    measurer: &dyn TextMeasurer,
) -> Result<f64, tickmark::AxisError>
where
    S: tickmark::Scale,
{
    // Keep a little air between the labels and the document edge.
    Ok(spec.measure(scale, measurer)? + 4.0)
}

fn svg_document(size: Vec2, origin: Vec2, viewport: Viewport, groups: &[SvgNode]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = size.x.ceil(),
        h = size.y.ceil(),
    ));
    out.push('\n');
    out.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#f7f7f7"/>"##,
        origin.x, origin.y, viewport.width, viewport.height
    ));
    out.push('\n');
    for group in groups {
        out.push_str(&group.to_svg_string());
    }
    out.push_str("</svg>\n");
    out
}
