// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Rust Lock-in library
//!
//! This library simulates a lock-in amplifier: it synthesises sine and
//! square waves, buries them in Gaussian noise, and recovers their amplitude
//! by multiplying with a reference waveform and averaging the product.
//!
//! ```
//! use rust_lockin::generation::sine_wave;
//! use rust_lockin::lockin::{LockinAmplifier, ReferenceShape};
//! use rust_lockin::utility::NoiseGenerator;
//!
//! let signal = sine_wave(0.5, 10.0, 10_000.0, 1.0).unwrap();
//! let reference = sine_wave(1.0, 10.0, 10_000.0, 1.0).unwrap();
//! let noise = NoiseGenerator::new(1).noise(0.0, 1.0, 10_000.0, 1.0).unwrap();
//!
//! let noisy: Vec<f64> = signal
//!     .amplitudes()
//!     .iter()
//!     .zip(&noise)
//!     .map(|(s, n)| s + n)
//!     .collect();
//! let reading = LockinAmplifier::new()
//!     .measure(ReferenceShape::Sine, reference.amplitudes(), &noisy)
//!     .unwrap();
//! assert!((reading.predicted_amplitude - 0.5).abs() < 0.1);
//! ```

pub mod config;
pub mod demos;
pub mod error;
pub mod generation;
pub mod lockin;
pub mod utility;
pub mod visualization;

pub use error::{Result, SignalError};
