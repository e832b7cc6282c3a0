// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained SVG backend.
//!
//! [`SvgTarget`] collects drawing calls into [`SvgNode`] values. Nothing is serialized until
//! [`SvgNode::to_svg_string`] is called, so hosts that build their own DOM can walk the tree
//! directly.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{BezPath, Line, PathEl, Point, Vec2};
use peniko::Color;
use tickmark_text::{BaselineShift, FontStyle, FontWeight, TextAnchor, TextStyle};

use crate::format::format_number;
use crate::plan::LabelStyle;
use crate::style::{DomainStyle, ShapeRendering, StrokeStyle, css_hex};
use crate::target::DrawTarget;

/// A node of the retained axis tree.
#[derive(Clone, Debug, PartialEq)]
pub enum SvgNode {
    /// A `<g>` element.
    Group {
        /// `class` attribute.
        class_name: Option<String>,
        /// Translation applied to the children.
        transform: Option<Vec2>,
        /// Child nodes, in paint order.
        children: Vec<SvgNode>,
    },
    /// A stroked, unfilled `<path>` (the baseline).
    Path {
        /// `class` attribute.
        class_name: Option<String>,
        /// The path geometry.
        path: BezPath,
        /// Stroke paint.
        stroke: StrokeStyle,
        /// `shape-rendering` hint.
        shape_rendering: ShapeRendering,
    },
    /// A `<line>` (a tick mark).
    Line {
        /// Segment endpoints.
        line: Line,
        /// Stroke paint.
        stroke: StrokeStyle,
    },
    /// A `<text>` element (a tick label).
    Text {
        /// The label text, unescaped.
        text: String,
        /// Label origin, excluding `dy`.
        origin: Point,
        /// Relative baseline shift, emitted as `dy`.
        dy: BaselineShift,
        /// Label font.
        font: TextStyle,
        /// Fill color.
        fill: Color,
        /// `text-anchor` value.
        anchor: TextAnchor,
    },
}

impl SvgNode {
    /// Serializes this node and its children as SVG markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out, 0);
        out
    }

    fn write_svg(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            Self::Group {
                class_name,
                transform,
                children,
            } => {
                out.push_str("<g");
                write_class(out, class_name.as_deref());
                if let Some(t) = transform {
                    let _ = write!(
                        out,
                        r#" transform="translate({}, {})""#,
                        format_number(t.x),
                        format_number(t.y)
                    );
                }
                out.push_str(">\n");
                for child in children {
                    child.write_svg(out, depth + 1);
                }
                for _ in 0..depth {
                    out.push_str("  ");
                }
                out.push_str("</g>\n");
            }
            Self::Path {
                class_name,
                path,
                stroke,
                shape_rendering,
            } => {
                out.push_str("<path");
                write_class(out, class_name.as_deref());
                let _ = write!(
                    out,
                    r#" shape-rendering="{}" d="{}" fill="none""#,
                    shape_rendering.as_svg(),
                    svg_path_data(path)
                );
                write_stroke(out, stroke);
                out.push_str("/>\n");
            }
            Self::Line { line, stroke } => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    format_number(line.p0.x),
                    format_number(line.p0.y),
                    format_number(line.p1.x),
                    format_number(line.p1.y)
                );
                write_stroke(out, stroke);
                out.push_str(r#" shape-rendering="crispEdges"/>"#);
                out.push('\n');
            }
            Self::Text {
                text,
                origin,
                dy,
                font,
                fill,
                anchor,
            } => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" dy="{}" fill="{}" font-size="{}" font-family="{}""#,
                    format_number(origin.x),
                    format_number(origin.y),
                    dy.svg_dy(),
                    css_hex(*fill),
                    format_number(font.font_size),
                    escape_xml(font.font_family.as_css_family())
                );
                if font.font_weight != FontWeight::NORMAL {
                    let _ = write!(out, r#" font-weight="{}""#, font.font_weight.0);
                }
                if font.font_style != FontStyle::Normal {
                    let _ = write!(out, r#" font-style="{}""#, font.font_style.as_css());
                }
                let _ = write!(out, r#" text-anchor="{}">"#, anchor.svg_value());
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
        }
    }
}

/// Compact SVG path data for `path`.
///
/// Axis-aligned segments use `H`/`V`, so the bottom baseline over `[0, 300]` with 6px caps is
/// `M0,6V0H300V6`.
pub fn svg_path_data(path: &BezPath) -> String {
    let mut d = String::new();
    let mut current = Point::ZERO;
    let mut start = Point::ZERO;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{},{}", format_number(p.x), format_number(p.y));
                current = p;
                start = p;
            }
            PathEl::LineTo(p) => {
                if p.x == current.x {
                    let _ = write!(d, "V{}", format_number(p.y));
                } else if p.y == current.y {
                    let _ = write!(d, "H{}", format_number(p.x));
                } else {
                    let _ = write!(d, "L{},{}", format_number(p.x), format_number(p.y));
                }
                current = p;
            }
            PathEl::QuadTo(c, p) => {
                let _ = write!(
                    d,
                    "Q{},{},{},{}",
                    format_number(c.x),
                    format_number(c.y),
                    format_number(p.x),
                    format_number(p.y)
                );
                current = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    format_number(c1.x),
                    format_number(c1.y),
                    format_number(c2.x),
                    format_number(c2.y),
                    format_number(p.x),
                    format_number(p.y)
                );
                current = p;
            }
            PathEl::ClosePath => {
                d.push('Z');
                current = start;
            }
        }
    }
    d
}

/// A [`DrawTarget`] that builds [`SvgNode`]s.
#[derive(Clone, Debug, Default)]
pub struct SvgTarget {
    nodes: Vec<SvgNode>,
    tick_stroke: StrokeStyle,
    label: Option<LabelStyle>,
}

impl SvgTarget {
    /// Creates an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nodes emitted so far, in paint order.
    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    /// Consumes the target, returning the emitted nodes.
    pub fn into_nodes(self) -> Vec<SvgNode> {
        self.nodes
    }

    /// Consumes the target, wrapping the emitted nodes in a translated group.
    pub fn into_group(self, class_name: Option<String>, transform: Vec2) -> SvgNode {
        SvgNode::Group {
            class_name,
            transform: Some(transform),
            children: self.nodes,
        }
    }
}

impl DrawTarget for SvgTarget {
    fn draw_path(&mut self, path: &BezPath, style: &DomainStyle) {
        self.nodes.push(SvgNode::Path {
            class_name: style.class_name.clone(),
            path: path.clone(),
            stroke: style.stroke.clone(),
            shape_rendering: style.shape_rendering,
        });
    }

    fn begin_ticks(&mut self, stroke: &StrokeStyle, label: &LabelStyle) {
        self.tick_stroke = stroke.clone();
        self.label = Some(label.clone());
    }

    fn draw_line(&mut self, line: Line) {
        self.nodes.push(SvgNode::Line {
            line,
            stroke: self.tick_stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        debug_assert!(self.label.is_some(), "begin_ticks must run first");
        let Some(label) = &self.label else {
            log::warn!("svg: dropping label {text:?} drawn outside a tick pass");
            return;
        };
        self.nodes.push(SvgNode::Text {
            text: String::from(text),
            origin,
            dy: label.baseline_shift,
            font: label.font.clone(),
            fill: label.fill,
            anchor: label.anchor,
        });
    }
}

fn write_class(out: &mut String, class_name: Option<&str>) {
    if let Some(class_name) = class_name {
        let _ = write!(out, r#" class="{}""#, escape_xml(class_name));
    }
}

fn write_stroke(out: &mut String, stroke: &StrokeStyle) {
    let _ = write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        css_hex(stroke.color),
        format_number(stroke.width)
    );
    let alpha = stroke.color.to_rgba8().a;
    if alpha != 255 {
        let _ = write!(
            out,
            r#" stroke-opacity="{}""#,
            format_number(f64::from(alpha) / 255.0)
        );
    }
    let _ = write!(out, r#" opacity="{}""#, format_number(stroke.opacity));
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::AxisSpec;
    use crate::orient::AxisOrient;
    use crate::render::{baseline_path, draw_axis};
    use crate::scale::ScaleBand;

    #[test]
    fn baseline_path_data_per_orientation() {
        let d = |orient: AxisOrient| {
            svg_path_data(&baseline_path(orient.direction(), 6.0, (0.0, 300.0)))
        };
        assert_eq!(d(AxisOrient::Bottom), "M0,6V0H300V6");
        assert_eq!(d(AxisOrient::Top), "M0,-6V0H300V-6");
        assert_eq!(d(AxisOrient::Left), "M-6,0H0V300H-6");
        assert_eq!(d(AxisOrient::Right), "M6,0H0V300H6");
    }

    #[test]
    fn zero_outer_size_never_prints_negative_zero() {
        let d = svg_path_data(&baseline_path(AxisOrient::Top.direction(), 0.0, (10.0, 20.0)));
        assert_eq!(d, "M10,0V0H20V0");
    }

    #[test]
    fn diagonal_segments_use_line_to() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((3.0, 4.0));
        path.close_path();
        assert_eq!(svg_path_data(&path), "M0,0L3,4Z");
    }

    #[test]
    fn band_axis_markup() {
        let scale = ScaleBand::new(["a<b", "c"], (0.0, 200.0)).with_padding(0.0, 0.0);
        let spec = AxisSpec::bottom();
        let plan = spec.tick_plan(&scale).unwrap();
        let mut target = SvgTarget::new();
        draw_axis(&mut target, &spec, Some(&plan), (0.0, 200.0));
        let svg = target
            .into_group(spec.class_name.clone(), Vec2::new(0.0, 300.0))
            .to_svg_string();

        let expected = concat!(
            "<g class=\"axis\" transform=\"translate(0, 300)\">\n",
            "  <path shape-rendering=\"crispEdges\" d=\"M0,6V0H200V6\" fill=\"none\" stroke=\"#000000\" stroke-width=\"1\" opacity=\"1\"/>\n",
            "  <line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"6\" stroke=\"#000000\" stroke-width=\"1\" opacity=\"1\" shape-rendering=\"crispEdges\"/>\n",
            "  <text x=\"0\" y=\"9\" dy=\"0.71em\" fill=\"#000000\" font-size=\"12\" font-family=\"sans-serif\" text-anchor=\"middle\">a&lt;b</text>\n",
            "  <line x1=\"100\" y1=\"0\" x2=\"100\" y2=\"6\" stroke=\"#000000\" stroke-width=\"1\" opacity=\"1\" shape-rendering=\"crispEdges\"/>\n",
            "  <text x=\"100\" y=\"9\" dy=\"0.71em\" fill=\"#000000\" font-size=\"12\" font-family=\"sans-serif\" text-anchor=\"middle\">c</text>\n",
            "</g>\n",
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn styled_labels_and_translucent_strokes() {
        let node = SvgNode::Text {
            text: String::from("x"),
            origin: Point::new(-9.0, 5.0),
            dy: BaselineShift::from_em(0.32),
            font: TextStyle::new(10.0)
                .with_family("Georgia")
                .with_weight(FontWeight::BOLD),
            fill: Color::from_rgb8(0xff, 0x00, 0x00),
            anchor: TextAnchor::End,
        };
        assert_eq!(
            node.to_svg_string(),
            "<text x=\"-9\" y=\"5\" dy=\"0.32em\" fill=\"#ff0000\" font-size=\"10\" font-family=\"Georgia\" font-weight=\"700\" text-anchor=\"end\">x</text>\n"
        );

        let line = SvgNode::Line {
            line: Line::new((0.0, 0.0), (0.0, -6.0)),
            stroke: StrokeStyle::solid(Color::from_rgba8(0, 0, 0, 51), 2.0).with_opacity(0.5),
        };
        assert!(
            line.to_svg_string()
                .contains(r#"stroke-width="2" stroke-opacity="0.2" opacity="0.5""#)
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "begin_ticks must run first")]
    fn label_outside_tick_pass_panics_in_debug() {
        SvgTarget::new().draw_text("x", Point::ZERO);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn label_outside_tick_pass_is_dropped() {
        let mut target = SvgTarget::new();
        target.draw_text("x", Point::ZERO);
        let group = target.into_group(None, Vec2::ZERO);
        assert!(!group.to_svg_string().contains("<text"));
    }
}
