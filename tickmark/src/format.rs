// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels and serialized geometry.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `v` with just enough fixed decimals to tell ticks `step` apart.
///
/// A step of `0.25` yields two decimals, `5` yields none. Negative zero prints as `0`.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    let decimals = precision_fixed(step);
    let out = format!("{:.*}", decimals, v);
    strip_negative_zero(out)
}

/// Formats `v` using the shortest representation that round-trips (`2.5`, `300`, `0.001`).
///
/// This is also the serialization used for SVG attributes and canvas style strings.
pub fn format_number(v: f64) -> String {
    // `-0.0 + 0.0` is `+0.0`.
    format!("{}", v + 0.0)
}

fn precision_fixed(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        return 0;
    }
    let decimals = (-exponent).min(20.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is a small non-negative integer"
    )]
    {
        decimals as usize
    }
}

fn strip_negative_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => String::from(rest),
        _ => s,
    }
}
