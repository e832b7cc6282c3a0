// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced to the host when computing or drawing an axis.

/// Errors returned by tick computation and the draw hooks.
///
/// None of these are transient: the same inputs fail the same way every time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AxisError {
    /// No explicit tick values were configured and the scale offers neither a tick
    /// generator nor a domain to fall back on.
    #[error("scale provides neither tick generation nor a domain")]
    NoTickSource,
    /// A component of the axis transform or range is NaN or infinite.
    #[error("axis geometry has a non-finite {field}")]
    NonFiniteGeometry {
        /// Which part of the geometry was rejected.
        field: &'static str,
    },
}
