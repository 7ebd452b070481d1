// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Elementwise transforms applied to sampled amplitudes

/// Add a constant offset to every sample.
///
/// `add_offset(y, 0.0)` returns a copy of `y`.
pub fn add_offset(amplitudes: &[f64], offset: f64) -> Vec<f64> {
    amplitudes.iter().map(|&y| y + offset).collect()
}

/// Rectify a signal: every sample is replaced by its magnitude.
///
/// Simulates a detector that cannot report negative readings. The input is
/// left untouched; see [`make_non_negative_in_place`] to rectify an owned
/// buffer.
pub fn make_non_negative(amplitudes: &[f64]) -> Vec<f64> {
    amplitudes.iter().map(|y| y.abs()).collect()
}

/// Rectify a buffer in place.
pub fn make_non_negative_in_place(amplitudes: &mut [f64]) {
    for y in amplitudes.iter_mut() {
        *y = y.abs();
    }
}
