// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis placement and the orientation data derived from it.
//!
//! Four placements collapse into two families. Ticks always point away from the plot area:
//! `top` and `left` axes grow towards negative coordinates, `bottom` and `right` towards
//! positive ones. [`AxisDirection`] carries that sign together with the family so geometry
//! code is written once and never re-branches on the placement.

use kurbo::{Point, Vec2};

/// Axis placement relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    /// `-1` for `top`/`left`, `+1` for `bottom`/`right`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }

    /// Whether the axis runs along x (`top`/`bottom`).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Resolves the placement into an [`AxisDirection`].
    pub fn direction(self) -> AxisDirection {
        let sign = self.sign();
        if self.is_horizontal() {
            AxisDirection::Horizontal { sign }
        } else {
            AxisDirection::Vertical { sign }
        }
    }
}

/// An axis family together with its outward sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisDirection {
    /// The axis runs along x; ticks extend along y.
    Horizontal {
        /// Outward direction along y (`-1` or `+1`).
        sign: f64,
    },
    /// The axis runs along y; ticks extend along x.
    Vertical {
        /// Outward direction along x (`-1` or `+1`).
        sign: f64,
    },
}

impl AxisDirection {
    /// The outward sign.
    pub fn sign(self) -> f64 {
        match self {
            Self::Horizontal { sign } | Self::Vertical { sign } => sign,
        }
    }

    /// Whether the axis runs along x.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal { .. })
    }

    /// Maps an axis-local `(along, cross)` pair to scene coordinates.
    ///
    /// `along` is measured in the axis' own dimension, `cross` along its normal.
    pub fn point(self, along: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal { .. } => Point::new(along, cross),
            Self::Vertical { .. } => Point::new(cross, along),
        }
    }

    /// Like [`AxisDirection::point`], but for offsets.
    pub fn offset(self, along: f64, cross: f64) -> Vec2 {
        self.point(along, cross).to_vec2()
    }
}
