// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scale capability set an axis consumes, and a few stock scales.
//!
//! An axis never builds or mutates a scale. It only asks, once per redraw:
//! - where a value lands ([`Scale::apply`]),
//! - which values to mark ([`Scale::ticks`], falling back to [`Scale::domain`]), and
//! - how to label them ([`Scale::tick_format`]).
//!
//! Everything except `apply` is optional, which is how continuous, ordinal and ad-hoc scales
//! share one axis implementation.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::{format_number, format_tick_with_step};

/// A label formatter for tick values.
pub type TickFormatter<V> = Arc<dyn Fn(&V) -> String>;

/// Tick count used when a scale generates ticks without an explicit count.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// A mapping from data values to pixel offsets along one axis.
pub trait Scale {
    /// The data value type. `Display` is the identity label format.
    type Value: Clone + fmt::Display;

    /// Maps a value to a pixel offset.
    fn apply(&self, value: &Self::Value) -> f64;

    /// The domain boundary values, if the scale exposes them.
    fn domain(&self) -> Option<Vec<Self::Value>> {
        None
    }

    /// Representative tick values, if the scale can generate them.
    ///
    /// `count` is a hint; `None` lets the scale choose.
    fn ticks(&self, _count: Option<usize>) -> Option<Vec<Self::Value>> {
        None
    }

    /// The scale's preferred label formatter, if it has one.
    ///
    /// A formatter may return an empty string to suppress a label (e.g. minor log ticks).
    fn tick_format(&self, _count: Option<usize>) -> Option<TickFormatter<Self::Value>> {
        None
    }
}

impl<S: Scale + ?Sized> Scale for &S {
    type Value = S::Value;

    fn apply(&self, value: &Self::Value) -> f64 {
        (**self).apply(value)
    }

    fn domain(&self) -> Option<Vec<Self::Value>> {
        (**self).domain()
    }

    fn ticks(&self, count: Option<usize>) -> Option<Vec<Self::Value>> {
        (**self).ticks(count)
    }

    fn tick_format(&self, count: Option<usize>) -> Option<TickFormatter<Self::Value>> {
        (**self).tick_format(count)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the first domain value (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the last domain value (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// The 1/2/5 step between ticks for roughly `count` ticks.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        let span = if d1 >= d0 { d1 - d0 } else { d0 - d1 };
        nice_step(span / count.max(1) as f64)
    }

    /// Returns roughly `count` evenly spaced “nice” values inside the domain.
    ///
    /// Values follow the domain's direction, so a reversed domain yields descending ticks.
    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || !d0.is_finite() || !d1.is_finite() {
            return Vec::new();
        }
        if d0 == d1 {
            return alloc::vec![d0];
        }
        let reverse = d1 < d0;
        let (lo, hi) = if reverse { (d1, d0) } else { (d0, d1) };
        let step = self.tick_step(count);
        let mut out = if step == 0.0 {
            alloc::vec![lo, hi]
        } else if step >= 1.0 {
            let i0 = (lo / step).ceil();
            let i1 = (hi / step).floor();
            index_span(i0, i1)
                .map(|k| (i0 + k as f64) * step)
                .collect()
        } else {
            // Dividing by the inverse keeps `0.3` from printing as `0.30000000000000004`.
            let inv = (1.0 / step).round();
            let i0 = (lo * inv).ceil();
            let i1 = (hi * inv).floor();
            index_span(i0, i1).map(|k| (i0 + k as f64) / inv).collect()
        };
        if reverse {
            out.reverse();
        }
        out
    }

    /// Extends the domain outward to multiples of the tick step.
    pub fn nice(self, count: usize) -> Self {
        let step = self.tick_step(count);
        if step == 0.0 || !step.is_finite() {
            return self;
        }
        let (d0, d1) = self.domain;
        let domain = if d1 >= d0 {
            ((d0 / step).floor() * step, (d1 / step).ceil() * step)
        } else {
            ((d0 / step).ceil() * step, (d1 / step).floor() * step)
        };
        Self { domain, ..self }
    }
}

impl Scale for ScaleLinear {
    type Value = f64;

    fn apply(&self, value: &f64) -> f64 {
        self.map(*value)
    }

    fn domain(&self) -> Option<Vec<f64>> {
        Some(alloc::vec![self.domain.0, self.domain.1])
    }

    fn ticks(&self, count: Option<usize>) -> Option<Vec<f64>> {
        Some(self.tick_values(count.unwrap_or(DEFAULT_TICK_COUNT)))
    }

    fn tick_format(&self, count: Option<usize>) -> Option<TickFormatter<f64>> {
        let step = self.tick_step(count.unwrap_or(DEFAULT_TICK_COUNT));
        Some(Arc::new(move |v: &f64| format_tick_with_step(*v, step)))
    }
}

/// Offsets `0..=i1 - i0`, or nothing if `i1 < i0`. Capped at 10k steps.
fn index_span(i0: f64, i1: f64) -> core::ops::Range<u64> {
    let n = i1 - i0;
    if !n.is_finite() || n < 0.0 {
        return 0..0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    let n = n.min(10_000.0) as u64;
    0..n + 1
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A log-scale mapping from a positive domain to a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new base-10 log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base. Invalid bases fall back to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }

    /// `base^e`, computed as a division for negative exponents so `0.3` stays `0.3`.
    fn scaled_power(&self, k: f64, e: f64) -> f64 {
        if e < 0.0 {
            k / self.base.powf(-e)
        } else {
            k * self.base.powf(e)
        }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Non-positive inputs (and degenerate domains) map to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns tick values for the domain.
    ///
    /// When the domain spans fewer than `count` powers of an integral base, every
    /// `k * base^e` (with `k` in `1..base`) inside the domain is returned, so labels can be
    /// thinned by the formatter. Otherwise powers of the base are returned, striding over
    /// exponents so that roughly `count` of them remain.
    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let reverse = d1 < d0;
        let (lo, hi) = if reverse { (d1, d0) } else { (d0, d1) };
        if lo <= 0.0 || !lo.is_finite() || !hi.is_finite() || count == 0 {
            return Vec::new();
        }
        let (la, lb) = (self.log_base(lo), self.log_base(hi));
        let i = la.min(lb).floor();
        let j = la.max(lb).ceil();
        let span = j - i;
        if !span.is_finite() {
            return Vec::new();
        }
        let integral_base = self.base >= 2.0 && self.base == self.base.floor();

        let mut out = Vec::new();
        if integral_base && span < count as f64 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "base is a finite integer; capped below"
            )]
            let k_max = self.base.min(1_000.0) as u32;
            for n in index_span(i, j) {
                let e = i + n as f64;
                for k in 1..k_max {
                    let t = self.scaled_power(f64::from(k), e);
                    if t < lo {
                        continue;
                    }
                    if t > hi {
                        break;
                    }
                    out.push(t);
                }
            }
        } else {
            // Step over exponents directly so a base close to 1 stays bounded by `count`.
            let stride = (span / count as f64).ceil().max(1.0);
            for n in index_span(0.0, (span / stride).floor()) {
                let t = self.scaled_power(1.0, i + n as f64 * stride);
                if t >= lo && t <= hi {
                    out.push(t);
                }
            }
            if self.base < 1.0 {
                out.reverse();
            }
        }
        if reverse {
            out.reverse();
        }
        out
    }

    /// Returns the first domain value (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the last domain value (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl Scale for ScaleLog {
    type Value = f64;

    fn apply(&self, value: &f64) -> f64 {
        self.map(*value)
    }

    fn domain(&self) -> Option<Vec<f64>> {
        Some(alloc::vec![self.domain.0, self.domain.1])
    }

    fn ticks(&self, count: Option<usize>) -> Option<Vec<f64>> {
        Some(self.tick_values(count.unwrap_or(DEFAULT_TICK_COUNT)))
    }

    /// Labels ticks whose mantissa is at most `max(1, base * count / tick_count)` and
    /// returns an empty label for the rest, so dense minor ticks stay unlabeled.
    fn tick_format(&self, count: Option<usize>) -> Option<TickFormatter<f64>> {
        let count = count.unwrap_or(DEFAULT_TICK_COUNT) as f64;
        let n = self.tick_values(DEFAULT_TICK_COUNT).len();
        let base = self.base;
        let k = if n == 0 {
            f64::INFINITY
        } else {
            (base * count / n as f64).max(1.0)
        };
        Some(Arc::new(move |v: &f64| {
            let d = *v;
            if d <= 0.0 || !d.is_finite() {
                return format_number(d);
            }
            let e = (d.ln() / base.ln()).round();
            let mut mantissa = d / base.powf(e);
            if mantissa * base < base - 0.5 {
                mantissa *= base;
            }
            if mantissa <= k {
                format_number(d)
            } else {
                String::new()
            }
        }))
    }
}

/// A band scale over ordinal labels.
///
/// `apply` returns the start of a label's band; unknown labels map to NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBand {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale with 10% inner and outer padding.
    pub fn new<I>(domain: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the band width.
    pub fn bandwidth(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = if r1 >= r0 { r1 - r0 } else { r0 - r1 };
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the start position of the band at `index`.
    ///
    /// Bands are laid out from `range.0` towards `range.1`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.bandwidth();
        let step = bw * (1.0 + self.padding_inner);
        let offset = bw * self.padding_outer + step * index as f64;
        if r1 >= r0 {
            r0 + offset
        } else {
            r0 - offset - bw
        }
    }

    /// Index of `label` in the domain.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == label)
    }
}

impl Scale for ScaleBand {
    type Value = String;

    fn apply(&self, value: &String) -> f64 {
        self.index_of(value).map_or(f64::NAN, |i| self.x(i))
    }

    fn domain(&self) -> Option<Vec<String>> {
        Some(self.domain.clone())
    }
}

/// A point scale over ordinal labels (a band scale with zero-width bands).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalePoint {
    domain: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl ScalePoint {
    /// Creates a point scale with half a step of outer padding.
    pub fn new<I>(domain: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range,
            padding: 0.5,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Distance between adjacent points.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = if r1 >= r0 { r1 - r0 } else { r0 - r1 };
        let denom = (n - 1.0) + 2.0 * self.padding;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the position of the point at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let offset = self.step() * (self.padding + index as f64);
        if r1 >= r0 { r0 + offset } else { r0 - offset }
    }

    /// Index of `label` in the domain.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == label)
    }
}

impl Scale for ScalePoint {
    type Value = String;

    fn apply(&self, value: &String) -> f64 {
        self.index_of(value).map_or(f64::NAN, |i| self.x(i))
    }

    fn domain(&self) -> Option<Vec<String>> {
        Some(self.domain.clone())
    }
}

/// A custom scale backed by a closure, with an optional domain.
///
/// Without a domain this scale has no tick source, so axes using it need explicit tick values.
pub struct FnScale<V, F> {
    map: F,
    domain: Option<Vec<V>>,
}

impl<V, F> FnScale<V, F>
where
    F: Fn(&V) -> f64,
{
    /// Wraps `map` as a scale.
    pub fn new(map: F) -> Self {
        Self { map, domain: None }
    }

    /// Sets the domain used as the fallback tick source.
    pub fn with_domain(mut self, domain: impl Into<Vec<V>>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

impl<V: fmt::Debug, F> fmt::Debug for FnScale<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnScale")
            .field("map", &"<fn>")
            .field("domain", &self.domain)
            .finish()
    }
}

impl<V, F> Scale for FnScale<V, F>
where
    V: Clone + fmt::Display,
    F: Fn(&V) -> f64,
{
    type Value = V;

    fn apply(&self, value: &V) -> f64 {
        (self.map)(value)
    }

    fn domain(&self) -> Option<Vec<V>> {
        self.domain.clone()
    }
}
