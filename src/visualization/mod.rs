// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! Visualization module
//!
//! This module describes what the demonstrations want plotted (figures,
//! panels, series, colours and labels) and defines the sink they hand
//! finished figures to. Rendering is left to the caller.

pub mod figure;
pub mod sink;
#[cfg(test)]
mod figure_test;

pub use figure::{Color, Figure, Panel, Series, DEFAULT_LINE_WIDTH};
pub use sink::{LogSink, PlotSink, RecordingSink};
