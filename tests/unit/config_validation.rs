//! Unit tests for build profile validation.

use beefocus::config::{validate_build_params, Build, BuildParams};
use beefocus::{ConfigError, Error};

fn base() -> BuildParams {
    BuildParams::for_build(Build::LowPowerHyperstarFocuser)
}

/// Test that every shipped build passes validation.
#[test]
fn test_all_builds_valid() {
    for build in Build::ALL {
        let params = BuildParams::for_build(build);
        assert!(
            validate_build_params(&params).is_ok(),
            "{} should be valid",
            build.name()
        );
    }
}

/// Test rejection of a zero command poll interval.
#[test]
fn test_zero_command_epoch() {
    let mut params = base();
    params.timing.ms_between_command_checks = 0;
    assert!(matches!(
        validate_build_params(&params),
        Err(Error::Config(ConfigError::ZeroCommandEpoch))
    ));
}

/// Test rejection of a zero sleep poll interval.
#[test]
fn test_zero_sleep_epoch() {
    let mut params = base();
    params.timing.ms_between_sleep_checks = 0;
    assert!(matches!(
        validate_build_params(&params),
        Err(Error::Config(ConfigError::ZeroSleepEpoch))
    ));
}

/// Test rejection of a zero step pulse.
#[test]
fn test_zero_step_pulse() {
    let mut params = base();
    params.timing.us_step_pulse = 0;
    assert!(matches!(
        validate_build_params(&params),
        Err(Error::Config(ConfigError::ZeroStepPulse))
    ));
}

/// Test rejection of an empty travel range.
#[test]
fn test_zero_max_position() {
    let mut params = base();
    params.max_abs_pos = 0;
    assert!(matches!(
        validate_build_params(&params),
        Err(Error::Config(ConfigError::ZeroMaxPosition))
    ));
}

/// Test that a zero power-up time is allowed.
#[test]
fn test_zero_power_up_allowed() {
    let mut params = base();
    params.timing.ms_to_power_stepper = 0;
    params.backlash_approach = 0;
    assert!(validate_build_params(&params).is_ok());
}
