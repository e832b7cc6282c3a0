// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser adapters for `tickmark`.
//!
//! - [`WebTextMeasurer`] implements [`tickmark_text::TextMeasurer`] with HTML Canvas
//!   `measureText`, so axis thickness matches what the browser will actually draw.
//! - `WebCanvas` (on `wasm32` only) implements [`tickmark::CanvasContext`] for a
//!   `CanvasRenderingContext2d`, so `AxisLayer::draw_on_canvas` can draw straight into a page.
//!
//! Non-`wasm32` builds keep [`WebTextMeasurer`] available and fall back to
//! [`HeuristicTextMeasurer`].

#![no_std]

use tickmark_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

/// A `wasm32` measurer backed by HTML Canvas 2D text metrics.
///
/// On non-`wasm32` targets, this type is still available but always falls back
/// to [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebTextMeasurer {
    /// Creates a measurer on a detached canvas.
    ///
    /// This requires a browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        Ok(Self {
            ctx: web::detached_context()?,
        })
    }

    /// Creates a measurer that reuses an existing canvas 2D context.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        #[cfg(target_arch = "wasm32")]
        {
            self.ctx.set_font(&style.css_font());
            let metrics = match self.ctx.measure_text(text) {
                Ok(m) => m,
                Err(err) => {
                    log::debug!("measureText failed ({err:?}); using heuristic metrics");
                    return HeuristicTextMeasurer.measure(text, style);
                }
            };

            // Older engines report zero for the bounding box fields.
            let ascent = metrics.actual_bounding_box_ascent();
            let descent = metrics.actual_bounding_box_descent();
            TextMetrics {
                advance_width: metrics.width(),
                ascent: if ascent > 0.0 {
                    ascent
                } else {
                    0.8 * style.font_size
                },
                descent: if descent > 0.0 {
                    descent
                } else {
                    0.2 * style.font_size
                },
                leading: 0.0,
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, style)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebCanvas;

#[cfg(target_arch = "wasm32")]
mod web {
    use tickmark::CanvasContext;
    use wasm_bindgen::{JsCast as _, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    pub(crate) fn detached_context() -> Result<CanvasRenderingContext2d, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("tickmark_web: missing window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("tickmark_web: missing document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("tickmark_web: missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    /// A [`CanvasContext`] over a browser `CanvasRenderingContext2d`.
    #[derive(Clone, Debug)]
    pub struct WebCanvas(pub CanvasRenderingContext2d);

    impl WebCanvas {
        /// Wraps the 2D context of `canvas`.
        pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("tickmark_web: missing 2d context"))?
                .dyn_into::<CanvasRenderingContext2d>()?;
            Ok(Self(ctx))
        }
    }

    fn report(call: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            log::warn!("canvas {call} failed: {err:?}");
        }
    }

    impl CanvasContext for WebCanvas {
        fn save(&mut self) {
            self.0.save();
        }

        fn restore(&mut self) {
            self.0.restore();
        }

        fn translate(&mut self, x: f64, y: f64) {
            report("translate", self.0.translate(x, y));
        }

        fn set_stroke_style(&mut self, style: &str) {
            self.0.set_stroke_style_str(style);
        }

        fn set_fill_style(&mut self, style: &str) {
            self.0.set_fill_style_str(style);
        }

        fn set_line_width(&mut self, width: f64) {
            self.0.set_line_width(width);
        }

        fn set_font(&mut self, font: &str) {
            self.0.set_font(font);
        }

        fn set_text_align(&mut self, align: &str) {
            self.0.set_text_align(align);
        }

        fn begin_path(&mut self) {
            self.0.begin_path();
        }

        fn move_to(&mut self, x: f64, y: f64) {
            self.0.move_to(x, y);
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.0.line_to(x, y);
        }

        fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
            self.0.quadratic_curve_to(cx, cy, x, y);
        }

        fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
            self.0.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
        }

        fn close_path(&mut self) {
            self.0.close_path();
        }

        fn stroke(&mut self) {
            self.0.stroke();
        }

        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            report("fillText", self.0.fill_text(text, x, y));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    extern crate std;

    use tickmark::{AxisSpec, ScaleLinear};

    use super::*;

    #[test]
    fn off_web_matches_the_heuristic() {
        let style = TextStyle::new(14.0);
        assert_eq!(
            WebTextMeasurer::new().measure("1,000", &style),
            HeuristicTextMeasurer.measure("1,000", &style)
        );
    }

    #[test]
    fn drives_axis_measurement() {
        let scale = ScaleLinear::new((0.0, 50.0), (0.0, 200.0));
        let axis = AxisSpec::<f64>::left().with_tick_count(5);
        assert_eq!(
            axis.measure(&scale, &WebTextMeasurer::default()),
            axis.measure(&scale, &HeuristicTextMeasurer)
        );
    }
}
