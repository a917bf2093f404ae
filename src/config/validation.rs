//! Build profile validation.

use crate::error::{ConfigError, Error, Result};

use super::BuildParams;

/// Validate a build profile.
///
/// Checks:
/// - Poll intervals are non-zero (the engine divides by them)
/// - At least one step is taken between command checks
/// - The step pulse has a width
/// - The travel range is non-empty
pub fn validate_build_params(params: &BuildParams) -> Result<()> {
    let timing = &params.timing;

    if timing.ms_between_command_checks == 0 {
        return Err(Error::Config(ConfigError::ZeroCommandEpoch));
    }

    if timing.ms_between_sleep_checks == 0 {
        return Err(Error::Config(ConfigError::ZeroSleepEpoch));
    }

    if timing.max_steps_between_checks == 0 {
        return Err(Error::Config(ConfigError::ZeroStepsBetweenChecks));
    }

    if timing.us_step_pulse == 0 {
        return Err(Error::Config(ConfigError::ZeroStepPulse));
    }

    if params.max_abs_pos == 0 {
        return Err(Error::Config(ConfigError::ZeroMaxPosition));
    }

    Ok(())
}
