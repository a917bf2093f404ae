//! Timing profile of a focuser build.

use serde::Deserialize;

/// Immutable timing parameters. All intervals are in milliseconds except the
/// step pulse width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingParams {
    /// Poll interval for new commands while idle.
    pub ms_between_command_checks: u32,

    /// Steps taken before checking for an interrupting command.
    pub max_steps_between_checks: u32,

    /// Idle time without an interrupting command before entering sleep.
    pub ms_inactivity_to_sleep: u32,

    /// Poll interval for new commands while asleep.
    pub ms_between_sleep_checks: u32,

    /// Time the stepper driver needs after being energized.
    pub ms_to_power_stepper: u32,

    /// Hold time of each half of a step pulse, and the settle time after a
    /// direction change.
    #[serde(default = "default_step_pulse")]
    pub us_step_pulse: u32,
}

fn default_step_pulse() -> u32 {
    TimingParams::DEFAULT_STEP_PULSE_US
}

impl TimingParams {
    /// Step pulse half-width used by every known build.
    pub const DEFAULT_STEP_PULSE_US: u32 = 1000;

    /// Create a timing profile with the default step pulse width.
    pub const fn new(
        ms_between_command_checks: u32,
        max_steps_between_checks: u32,
        ms_inactivity_to_sleep: u32,
        ms_between_sleep_checks: u32,
        ms_to_power_stepper: u32,
    ) -> Self {
        Self {
            ms_between_command_checks,
            max_steps_between_checks,
            ms_inactivity_to_sleep,
            ms_between_sleep_checks,
            ms_to_power_stepper,
            us_step_pulse: Self::DEFAULT_STEP_PULSE_US,
        }
    }

    /// Microseconds from `now_ms` to the next multiple of `epoch_ms`.
    ///
    /// Polls land on epoch boundaries so the schedule does not drift with the
    /// time spent handling commands.
    #[inline]
    pub fn us_to_next_epoch(now_ms: u64, epoch_ms: u32) -> u32 {
        let epoch = u64::from(epoch_ms.max(1));
        let ms = epoch - now_ms % epoch;
        (ms * 1000).min(u64::from(u32::MAX)) as u32
    }
}
