use anyhow::Result;
use rust_lockin::config::{DemoSuiteConfig, LockinDemoConfig, ModulationDemoConfig};
use rust_lockin::SignalError;

#[test]
fn test_default_config() {
    let config = DemoSuiteConfig::default();

    assert_eq!(config.sine.sample_rate, 1000.0);
    assert_eq!(config.sine.frequency, 10.0);
    assert_eq!(config.offset.offset_first, 2.0);
    assert_eq!(config.offset.offset_second, 5.0);
    assert_eq!(config.modulation.modulation_sample_rate, 50.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_fields_use_defaults() -> Result<()> {
    let config: DemoSuiteConfig = serde_json::from_str(
        r#"{
            "sine": { "amplitude": 0.25, "noise_standard_deviation": 3.0 },
            "modulation": { "modulation_frequency": 4.0 }
        }"#,
    )?;

    assert_eq!(config.sine.amplitude, 0.25);
    assert_eq!(config.sine.noise_standard_deviation, 3.0);
    assert_eq!(config.sine.sample_rate, 1000.0);
    assert_eq!(config.square, LockinDemoConfig::default());
    assert_eq!(config.modulation.modulation_frequency, 4.0);
    assert_eq!(config.modulation.frequency, 10.0);
    config.validate()?;
    Ok(())
}

#[test]
fn test_config_validation() {
    let invalid_rate = LockinDemoConfig {
        sample_rate: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        invalid_rate.validate(),
        Err(SignalError::InvalidParameter {
            name: "sample_rate",
            ..
        })
    ));

    let invalid_frequency = LockinDemoConfig {
        frequency: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        invalid_frequency.validate(),
        Err(SignalError::InvalidParameter {
            name: "frequency",
            ..
        })
    ));

    let too_few_samples = ModulationDemoConfig {
        sample_rate: 2.0,
        ..Default::default()
    };
    assert!(matches!(
        too_few_samples.validate(),
        Err(SignalError::InvalidParameter {
            name: "sample_rate",
            ..
        })
    ));

    let mut suite = DemoSuiteConfig::default();
    suite.offset.amplitude = f64::INFINITY;
    match suite.validate() {
        Err(SignalError::InvalidParameter { name, .. }) => assert_eq!(name, "amplitude"),
        other => panic!("Expected InvalidParameter, got {:?}", other),
    }
}
