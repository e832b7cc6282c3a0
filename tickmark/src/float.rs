// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `libm` fallbacks for the float methods tick generation needs.
//!
//! `core` lacks `f64::floor`, `f64::log10` and friends. Without the `std` feature the scale
//! and formatting code imports [`FloatExt`] instead, which dispatches to `libm`.

pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn log10(self) -> Self;
    fn ln(self) -> Self;
    fn powf(self, n: Self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }

    fn log10(self) -> Self {
        libm::log10(self)
    }

    fn ln(self) -> Self {
        libm::log(self)
    }

    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tickmark requires either the `std` or `libm` feature");
