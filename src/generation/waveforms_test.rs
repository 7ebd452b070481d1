// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-lockin project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use super::waveforms::{line, sine_wave, square_wave, variable_square_wave};
use crate::error::SignalError;

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_sine_wave_time_axis_includes_both_endpoints() {
        let wave = sine_wave(3.0, 5.0, 1000.0, 1.0).unwrap();

        assert_eq!(wave.len(), 1000);
        assert_eq!(wave.times().len(), wave.amplitudes().len());
        assert_eq!(wave.times()[0], 0.0);
        assert_eq!(wave.times()[999], 1.0);
        assert!((wave.times()[1] - 1.0 / 999.0).abs() < EPSILON);
        assert!(wave.times().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sine_wave_values() {
        // 5 samples per second over 0.8 s gives 4 instants spaced by 0.8 / 3
        let wave = sine_wave(2.0, 1.0, 5.0, 0.8).unwrap();
        assert_eq!(wave.len(), 4);

        let expected = [0.0, 2.0 * (2.0 * std::f64::consts::PI * 0.8 / 3.0).sin()];
        assert!((wave.amplitudes()[0] - expected[0]).abs() < EPSILON);
        assert!((wave.amplitudes()[1] - expected[1]).abs() < EPSILON);
        assert!(wave.amplitudes().iter().all(|y| y.abs() <= 2.0 + EPSILON));
    }

    #[test]
    fn test_sine_wave_rejects_invalid_parameters() {
        match sine_wave(1.0, 5.0, 0.0, 1.0) {
            Err(SignalError::InvalidParameter { name, .. }) => assert_eq!(name, "sample_rate"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
        match sine_wave(1.0, 5.0, 1000.0, -1.0) {
            Err(SignalError::InvalidParameter { name, .. }) => assert_eq!(name, "duration"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
        // 0.5 samples per second for one second rounds down to nothing
        match sine_wave(1.0, 5.0, 0.5, 1.0) {
            Err(SignalError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "sample_rate * duration")
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
        assert!(sine_wave(f64::NAN, 5.0, 1000.0, 1.0).is_err());
    }

    #[test]
    fn test_square_wave_zero_crossing_maps_to_high_level() {
        // t = 0, 0.25, 0.5, 0.75, 1.0 for a 1 Hz square wave
        let wave = square_wave(1.5, 1.0, 5.0, 1.0).unwrap();
        assert_eq!(wave.amplitudes(), &[1.5, 1.5, -1.5, -1.5, 1.5]);
    }

    #[test]
    fn test_square_wave_only_takes_two_levels() {
        let wave = square_wave(2.0, 7.0, 1000.0, 1.0).unwrap();
        assert_eq!(wave.len(), 1000);
        assert!(wave.amplitudes().iter().all(|&y| y == 2.0 || y == -2.0));

        let highs = wave.amplitudes().iter().filter(|&&y| y > 0.0).count();
        // Half the samples sit on each level, give or take the shared endpoint
        assert!((highs as i64 - 500).abs() <= 8, "highs = {}", highs);
    }

    #[test]
    fn test_line() {
        let ramp = line(2.0, 1.0, 5).unwrap();
        assert_eq!(ramp.times(), &[0.0, 1.25, 2.5, 3.75, 5.0]);
        assert_eq!(ramp.amplitudes(), &[1.0, 3.5, 6.0, 8.5, 11.0]);

        assert!(matches!(
            line(1.0, 0.0, 0),
            Err(SignalError::InvalidParameter {
                name: "number_of_samples",
                ..
            })
        ));
    }

    #[test]
    fn test_variable_square_wave_symmetric_pulse() {
        // 10 instants, one falling edge inside the window
        let wave = variable_square_wave(4.0, 5, 5, 10.0, 1.0).unwrap();

        assert_eq!(wave.len(), 11);
        assert_eq!(
            wave.amplitudes(),
            &[4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        // The edge repeats the instant t_5
        assert_eq!(wave.times()[5], wave.times()[6]);
        assert!((wave.times()[5] - 5.0 / 9.0).abs() < EPSILON);
        assert_eq!(*wave.times().last().unwrap(), 1.0);
    }

    #[test]
    fn test_variable_square_wave_edge_on_last_instant_is_not_counted() {
        // Period of 5 intervals over 10 intervals: edges at k = 2, 5, 7 and 10
        let wave = variable_square_wave(1.0, 2, 3, 11.0, 1.0).unwrap();

        assert_eq!(wave.len(), 11 + 3);
        assert_eq!(
            wave.amplitudes(),
            &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert!(wave.times().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_variable_square_wave_length_tracks_transitions() {
        for (high, low) in [(1, 1), (3, 7), (10, 2), (250, 250)] {
            let wave = variable_square_wave(1.0, high, low, 1000.0, 1.0).unwrap();
            let repeated = wave.times().windows(2).filter(|w| w[0] == w[1]).count();
            assert_eq!(wave.len(), 1000 + repeated, "high={} low={}", high, low);
        }
    }

    #[test]
    fn test_variable_square_wave_rejects_invalid_parameters() {
        assert!(matches!(
            variable_square_wave(1.0, 0, 5, 100.0, 1.0),
            Err(SignalError::InvalidParameter {
                name: "high_duration",
                ..
            })
        ));
        assert!(matches!(
            variable_square_wave(1.0, 5, 0, 100.0, 1.0),
            Err(SignalError::InvalidParameter {
                name: "low_duration",
                ..
            })
        ));
        assert!(variable_square_wave(1.0, 1, 1, 1.0, 1.0).is_err());
    }
}
