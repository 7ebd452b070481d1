// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Demonstration Parameters
//!
//! This module defines the parameter sets of the lock-in demonstrations.
//! Every structure derives `Deserialize`/`Serialize`, fills missing fields
//! with the defaults below, and exposes a `validate()` method rejecting
//! values the signal generator cannot work with. Where the parameters come
//! from (embedded literals, a document parsed by the caller, ...) is up to
//! the caller.
//!
//! ## Usage
//!
//! ```
//! use rust_lockin::config::LockinDemoConfig;
//!
//! let config = LockinDemoConfig {
//!     amplitude: 0.2,
//!     noise_standard_deviation: 2.0,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{ensure_finite, ensure_positive, Result, SignalError};
use serde::{Deserialize, Serialize};

fn default_sample_rate() -> f64 {
    1000.0
}

fn default_frequency() -> f64 {
    10.0
}

fn default_amplitude() -> f64 {
    1.0
}

fn default_noise_standard_deviation() -> f64 {
    1.0
}

fn default_offset_first() -> f64 {
    2.0
}

fn default_offset_second() -> f64 {
    5.0
}

fn default_modulation_frequency() -> f64 {
    2.0
}

fn default_modulation_sample_rate() -> f64 {
    50.0
}

/// Parameters of the sine and square recovery demonstrations.
///
/// A one second signal of `amplitude` at `frequency` is buried in zero-mean
/// Gaussian noise of `noise_standard_deviation`, then recovered against a
/// unit reference of the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockinDemoConfig {
    /// Samples per second of every generated series
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,

    /// Frequency of the hidden signal and of the reference, in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Amplitude of the hidden signal
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Standard deviation of the added noise
    #[serde(default = "default_noise_standard_deviation")]
    pub noise_standard_deviation: f64,
}

impl Default for LockinDemoConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            noise_standard_deviation: default_noise_standard_deviation(),
        }
    }
}

impl LockinDemoConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("sample_rate", self.sample_rate)?;
        ensure_positive("frequency", self.frequency)?;
        ensure_finite("amplitude", self.amplitude)?;
        ensure_positive("noise_standard_deviation", self.noise_standard_deviation)
    }
}

/// Parameters of the offset rejection demonstration.
///
/// Two copies of a square wave shifted by different offsets are multiplied
/// by a zero-centred reference; their averages coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetDemoConfig {
    #[serde(default = "default_offset_first")]
    pub offset_first: f64,

    #[serde(default = "default_offset_second")]
    pub offset_second: f64,

    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,

    #[serde(default = "default_frequency")]
    pub frequency: f64,

    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

impl Default for OffsetDemoConfig {
    fn default() -> Self {
        Self {
            offset_first: default_offset_first(),
            offset_second: default_offset_second(),
            sample_rate: default_sample_rate(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
        }
    }
}

impl OffsetDemoConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_finite("offset_first", self.offset_first)?;
        ensure_finite("offset_second", self.offset_second)?;
        ensure_positive("sample_rate", self.sample_rate)?;
        ensure_positive("frequency", self.frequency)?;
        ensure_finite("amplitude", self.amplitude)
    }
}

/// Parameters of the modulated square wave demonstrations.
///
/// A modulation envelope sampled at `modulation_sample_rate` for one second
/// sets the amplitude of successive one second blocks of a square carrier at
/// `frequency`. The envelope is then recovered block by block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulationDemoConfig {
    /// Samples per second of the carrier
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,

    /// Carrier frequency in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Peak amplitude of the modulation envelope
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    #[serde(default = "default_noise_standard_deviation")]
    pub noise_standard_deviation: f64,

    /// Frequency of the rectified modulation envelope, in Hz.
    ///
    /// Only the positive-signal demonstration uses it; the envelope there is
    /// a rectified sine at half this frequency, whose bumps repeat at this
    /// frequency.
    #[serde(default = "default_modulation_frequency")]
    pub modulation_frequency: f64,

    /// Number of envelope samples, hence of carrier blocks, per second
    #[serde(default = "default_modulation_sample_rate")]
    pub modulation_sample_rate: f64,
}

impl Default for ModulationDemoConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            noise_standard_deviation: default_noise_standard_deviation(),
            modulation_frequency: default_modulation_frequency(),
            modulation_sample_rate: default_modulation_sample_rate(),
        }
    }
}

impl ModulationDemoConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("sample_rate", self.sample_rate)?;
        // Each carrier block drops its last sample and must keep at least two
        if self.sample_rate < 3.0 {
            return Err(SignalError::InvalidParameter {
                name: "sample_rate",
                value: self.sample_rate,
                reason: "must provide at least 3 samples per carrier block",
            });
        }
        ensure_positive("frequency", self.frequency)?;
        ensure_finite("amplitude", self.amplitude)?;
        ensure_positive("noise_standard_deviation", self.noise_standard_deviation)?;
        ensure_positive("modulation_frequency", self.modulation_frequency)?;
        ensure_positive("modulation_sample_rate", self.modulation_sample_rate)?;
        if self.modulation_sample_rate < 1.0 {
            return Err(SignalError::InvalidParameter {
                name: "modulation_sample_rate",
                value: self.modulation_sample_rate,
                reason: "yields zero modulation samples",
            });
        }
        Ok(())
    }
}

/// Parameters for the whole demonstration suite
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemoSuiteConfig {
    #[serde(default)]
    pub offset: OffsetDemoConfig,

    #[serde(default)]
    pub sine: LockinDemoConfig,

    #[serde(default)]
    pub square: LockinDemoConfig,

    #[serde(default)]
    pub modulation: ModulationDemoConfig,
}

impl DemoSuiteConfig {
    /// Validate every section, stopping at the first invalid value
    pub fn validate(&self) -> Result<()> {
        self.offset.validate()?;
        self.sine.validate()?;
        self.square.validate()?;
        self.modulation.validate()
    }
}
