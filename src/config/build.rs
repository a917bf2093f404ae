//! Build profiles: the fixed table of known hardware variants.

use core::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

use super::timing::TimingParams;

/// Known hardware builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Build {
    /// Battery friendly Hyperstar focuser with a home switch.
    #[default]
    LowPowerHyperstarFocuser,
    /// Hyperstar profile with short intervals for tests.
    UnitTestBuildHyperstar,
    /// Conventional focuser without a home switch that practically never sleeps.
    TraditionalFocuser,
    /// Traditional profile with short intervals for tests.
    UnitTestTraditionalFocuser,
}

impl Build {
    /// All builds in the table.
    pub const ALL: [Build; 4] = [
        Build::LowPowerHyperstarFocuser,
        Build::UnitTestBuildHyperstar,
        Build::TraditionalFocuser,
        Build::UnitTestTraditionalFocuser,
    ];

    /// Configuration name of the build.
    pub const fn name(self) -> &'static str {
        match self {
            Build::LowPowerHyperstarFocuser => "low_power_hyperstar_focuser",
            Build::UnitTestBuildHyperstar => "unit_test_build_hyperstar",
            Build::TraditionalFocuser => "traditional_focuser",
            Build::UnitTestTraditionalFocuser => "unit_test_traditional_focuser",
        }
    }
}

impl FromStr for Build {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| ConfigError::UnknownBuild(heapless::String::try_from(s).unwrap_or_default()))
    }
}

/// Immutable hardware profile, chosen once when the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BuildParams {
    /// Timing profile.
    pub timing: TimingParams,

    /// Whether a home switch is fitted.
    pub has_home: bool,

    /// Largest absolute position the carriage may be driven to.
    pub max_abs_pos: u32,

    /// Inward moves overshoot by this many steps and finish moving forward.
    #[serde(default = "default_backlash_approach")]
    pub backlash_approach: u32,
}

fn default_backlash_approach() -> u32 {
    BuildParams::DEFAULT_BACKLASH_APPROACH
}

impl BuildParams {
    /// Overshoot used by every known build.
    pub const DEFAULT_BACKLASH_APPROACH: u32 = 500;

    /// Look up a build in the table.
    pub const fn for_build(build: Build) -> Self {
        match build {
            Build::LowPowerHyperstarFocuser => Self {
                timing: TimingParams::new(100, 50, 5 * 60 * 1000, 1000, 1000),
                has_home: true,
                max_abs_pos: 35000,
                backlash_approach: Self::DEFAULT_BACKLASH_APPROACH,
            },
            Build::UnitTestBuildHyperstar => Self {
                timing: TimingParams::new(10, 2, 1000, 500, 200),
                has_home: true,
                max_abs_pos: 35000,
                backlash_approach: Self::DEFAULT_BACKLASH_APPROACH,
            },
            Build::TraditionalFocuser => Self {
                timing: TimingParams::new(100, 50, 10 * 24 * 60 * 60 * 1000, 1000, 1000),
                has_home: false,
                max_abs_pos: 5000,
                backlash_approach: Self::DEFAULT_BACKLASH_APPROACH,
            },
            Build::UnitTestTraditionalFocuser => Self {
                timing: TimingParams::new(10, 2, 1000, 500, 200),
                has_home: false,
                max_abs_pos: 5000,
                backlash_approach: Self::DEFAULT_BACKLASH_APPROACH,
            },
        }
    }

    /// Largest position as a signed step count.
    #[inline]
    pub fn max_position(&self) -> i32 {
        i32::try_from(self.max_abs_pos).unwrap_or(i32::MAX)
    }
}

impl From<Build> for BuildParams {
    fn from(build: Build) -> Self {
        Self::for_build(build)
    }
}

/// Per-field timing overrides from a configuration file.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TimingOverrides {
    /// Override for [`TimingParams::ms_between_command_checks`].
    pub ms_between_command_checks: Option<u32>,
    /// Override for [`TimingParams::max_steps_between_checks`].
    pub max_steps_between_checks: Option<u32>,
    /// Override for [`TimingParams::ms_inactivity_to_sleep`].
    pub ms_inactivity_to_sleep: Option<u32>,
    /// Override for [`TimingParams::ms_between_sleep_checks`].
    pub ms_between_sleep_checks: Option<u32>,
    /// Override for [`TimingParams::ms_to_power_stepper`].
    pub ms_to_power_stepper: Option<u32>,
    /// Override for [`TimingParams::us_step_pulse`].
    pub us_step_pulse: Option<u32>,
}

impl TimingOverrides {
    fn apply(&self, timing: &mut TimingParams) {
        let fields = [
            (self.ms_between_command_checks, &mut timing.ms_between_command_checks),
            (self.max_steps_between_checks, &mut timing.max_steps_between_checks),
            (self.ms_inactivity_to_sleep, &mut timing.ms_inactivity_to_sleep),
            (self.ms_between_sleep_checks, &mut timing.ms_between_sleep_checks),
            (self.ms_to_power_stepper, &mut timing.ms_to_power_stepper),
            (self.us_step_pulse, &mut timing.us_step_pulse),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Root configuration structure from TOML: a base build plus overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FocuserConfig {
    /// Base profile by [`Build::name`]. Absent means [`Build::default`].
    pub build: Option<heapless::String<32>>,

    /// Override for [`BuildParams::has_home`].
    pub has_home: Option<bool>,

    /// Override for [`BuildParams::max_abs_pos`].
    pub max_abs_pos: Option<u32>,

    /// Override for [`BuildParams::backlash_approach`].
    pub backlash_approach: Option<u32>,

    /// Timing overrides.
    #[serde(default)]
    pub timing: TimingOverrides,
}

impl FocuserConfig {
    /// The selected base build.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownBuild`] if the name is not in the build table.
    pub fn base_build(&self) -> Result<Build, ConfigError> {
        match &self.build {
            Some(name) => name.parse(),
            None => Ok(Build::default()),
        }
    }

    /// Resolve the base build and apply overrides.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownBuild`] if the base build name is not known.
    pub fn build_params(&self) -> Result<BuildParams, ConfigError> {
        let mut params = BuildParams::for_build(self.base_build()?);
        self.timing.apply(&mut params.timing);
        if let Some(has_home) = self.has_home {
            params.has_home = has_home;
        }
        if let Some(max_abs_pos) = self.max_abs_pos {
            params.max_abs_pos = max_abs_pos;
        }
        if let Some(backlash_approach) = self.backlash_approach {
            params.backlash_approach = backlash_approach;
        }
        Ok(params)
    }
}
