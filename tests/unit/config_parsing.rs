//! Unit tests for TOML configuration parsing.

use beefocus::config::{parse_config, Build, BuildParams, FocuserConfig};
use beefocus::{ConfigError, Error};

/// Test that a bare build selection picks the table entry unchanged.
#[test]
fn test_parse_build_selection() {
    let params = parse_config(r#"build = "unit_test_build_hyperstar""#).expect("valid config");

    assert_eq!(params, BuildParams::for_build(Build::UnitTestBuildHyperstar));
    assert_eq!(params.timing.ms_between_command_checks, 10);
    assert_eq!(params.timing.max_steps_between_checks, 2);
    assert_eq!(params.timing.us_step_pulse, 1000);
}

/// Test every override at once.
#[test]
fn test_parse_all_overrides() {
    let toml_str = r#"
build = "traditional_focuser"
has_home = true
max_abs_pos = 12000
backlash_approach = 200

[timing]
ms_between_command_checks = 20
max_steps_between_checks = 10
ms_inactivity_to_sleep = 60000
ms_between_sleep_checks = 250
ms_to_power_stepper = 5
us_step_pulse = 400
"#;

    let params = parse_config(toml_str).expect("valid config");

    assert!(params.has_home);
    assert_eq!(params.max_abs_pos, 12000);
    assert_eq!(params.backlash_approach, 200);
    assert_eq!(params.timing.ms_between_command_checks, 20);
    assert_eq!(params.timing.max_steps_between_checks, 10);
    assert_eq!(params.timing.ms_inactivity_to_sleep, 60000);
    assert_eq!(params.timing.ms_between_sleep_checks, 250);
    assert_eq!(params.timing.ms_to_power_stepper, 5);
    assert_eq!(params.timing.us_step_pulse, 400);
}

/// Test that the traditional build practically never sleeps.
#[test]
fn test_traditional_build_sleeps_after_ten_days() {
    let params = parse_config(r#"build = "traditional_focuser""#).expect("valid config");
    assert_eq!(params.timing.ms_inactivity_to_sleep, 10 * 24 * 60 * 60 * 1000);
}

/// Test that the raw config keeps unset overrides as `None`.
#[test]
fn test_raw_config_defaults() {
    let config: FocuserConfig = toml::from_str("").expect("empty config");

    assert!(config.build.is_none());
    assert_eq!(config.base_build(), Ok(Build::LowPowerHyperstarFocuser));
    assert!(config.has_home.is_none());
    assert!(config.max_abs_pos.is_none());
    assert!(config.timing.us_step_pulse.is_none());
}

/// Test that an unknown build name is reported as such.
#[test]
fn test_unknown_build_name() {
    let result = parse_config(r#"build = "hyperdrive""#);
    match result {
        Err(Error::Config(ConfigError::UnknownBuild(name))) => assert_eq!(name.as_str(), "hyperdrive"),
        other => panic!("expected UnknownBuild, got {other:?}"),
    }
}

/// Test that wrong value types are rejected.
#[test]
fn test_wrong_type_is_parse_error() {
    let result = parse_config("max_abs_pos = \"far\"");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that negative values do not fit unsigned fields.
#[test]
fn test_negative_value_is_parse_error() {
    let result = parse_config("[timing]\nms_to_power_stepper = -1\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that `BuildParams` can be deserialized directly as a full profile.
#[test]
fn test_full_profile_deserializes() {
    let toml_str = r#"
has_home = false
max_abs_pos = 800

[timing]
ms_between_command_checks = 100
max_steps_between_checks = 50
ms_inactivity_to_sleep = 1000
ms_between_sleep_checks = 1000
ms_to_power_stepper = 1000
"#;

    let params: BuildParams = toml::from_str(toml_str).expect("full profile");
    assert_eq!(params.max_abs_pos, 800);
    assert_eq!(params.backlash_approach, BuildParams::DEFAULT_BACKLASH_APPROACH);
    assert_eq!(params.timing.us_step_pulse, 1000);
}
