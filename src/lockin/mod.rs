// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//! Lock-in engine
//!
//! This module recovers the amplitude of a periodic signal hidden in noise
//! by multiplying it with a reference waveform of the same frequency and
//! phase, then averaging the product.

pub mod amplifier;

pub use amplifier::{
    lock_in, lock_in_segments, mix, time_average, LockinAmplifier, LockinReading, ReferenceShape,
    SynchronousDetector,
};

/// Create the default synchronous detector
pub fn create_detector() -> Box<dyn SynchronousDetector> {
    Box::new(LockinAmplifier::new())
}
