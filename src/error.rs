// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error types shared by the signal generator and the lock-in engine

use thiserror::Error;

/// Errors raised when a caller passes arrays or parameters that cannot be processed.
///
/// Every variant names the offending argument so the caller can tell which
/// constraint was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// Reference and input arrays differ in length
    #[error("Array lengths don't match: reference={reference}, input={input}")]
    ShapeMismatch { reference: usize, input: usize },

    /// A mean was requested over an array with no samples
    #[error("Argument '{argument}' is empty, cannot compute a mean")]
    EmptyInput { argument: &'static str },

    /// A generator parameter is out of range or yields no samples
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Result type used throughout the numeric core
pub type Result<T> = std::result::Result<T, SignalError>;

/// Fail with `InvalidParameter` unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SignalError::InvalidParameter {
            name,
            value,
            reason: "must be a finite value greater than zero",
        })
    }
}

/// Fail with `InvalidParameter` unless `value` is finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SignalError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}
