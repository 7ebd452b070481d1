// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Runs every lock-in demonstration with default parameters.
// Figures are summarised in the log; set RUST_LOG=trace to dump them as JSON.

use anyhow::Result;
use rust_lockin::config::DemoSuiteConfig;
use rust_lockin::demos::run_all;
use rust_lockin::utility::NoiseGenerator;
use rust_lockin::visualization::LogSink;

fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let config = DemoSuiteConfig::default();
    let mut generator = NoiseGenerator::from_os_rng();
    let mut sink = LogSink;

    run_all(&config, &mut generator, &mut sink)
}
