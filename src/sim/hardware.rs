//! Simulated pins and carriage.

use crate::error::HardwareError;
use crate::interface::{HardwareInterface, Pin, PinIoMode, PinState};

/// Pin bank attached to a simulated carriage.
///
/// Every inactive-to-active edge on STEP moves the carriage one step in the
/// direction on DIR, but only while the motor is enabled. The home switch
/// reads active whenever the carriage is at or below zero.
#[derive(Debug, Clone)]
pub struct SimHardware {
    levels: [Option<PinState>; 4],
    modes: [Option<PinIoMode>; 4],
    carriage: i64,
    step_pulses: u64,
    home_override: Option<PinState>,
    failing_pin: Option<Pin>,
}

impl SimHardware {
    /// Where the carriage starts unless told otherwise.
    pub const DEFAULT_CARRIAGE: i64 = 1000;

    /// Pins unconfigured, carriage at [`Self::DEFAULT_CARRIAGE`].
    pub fn new() -> Self {
        Self::with_carriage(Self::DEFAULT_CARRIAGE)
    }

    /// Pins unconfigured, carriage at `carriage` steps from home.
    pub fn with_carriage(carriage: i64) -> Self {
        Self {
            levels: [None; 4],
            modes: [None; 4],
            carriage,
            step_pulses: 0,
            home_override: None,
            failing_pin: None,
        }
    }

    /// Physical carriage position.
    pub fn carriage(&self) -> i64 {
        self.carriage
    }

    /// Number of STEP edges seen, moved or not.
    pub fn step_pulses(&self) -> u64 {
        self.step_pulses
    }

    /// Last level written to `pin`.
    pub fn level(&self, pin: Pin) -> Option<PinState> {
        self.levels[pin as usize]
    }

    /// Mode last set on `pin`.
    pub fn mode(&self, pin: Pin) -> Option<PinIoMode> {
        self.modes[pin as usize]
    }

    /// Whether the motor enable pin is driven to the "on" level.
    pub fn motor_enabled(&self) -> bool {
        self.level(Pin::MotorEnable) == Some(PinState::MotorOn)
    }

    /// Force the home switch to read `state`, or `None` to follow the carriage.
    pub fn set_home_override(&mut self, state: Option<PinState>) {
        self.home_override = state;
    }

    /// Make every access to `pin` fail, or `None` to heal.
    pub fn set_failing_pin(&mut self, pin: Option<Pin>) {
        self.failing_pin = pin;
    }

    fn check(&self, pin: Pin, err: HardwareError) -> Result<(), HardwareError> {
        if self.failing_pin == Some(pin) {
            return Err(err);
        }
        Ok(())
    }
}

impl Default for SimHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareInterface for SimHardware {
    fn pin_mode(&mut self, pin: Pin, mode: PinIoMode) -> Result<(), HardwareError> {
        self.check(pin, HardwareError::PinMode(pin))?;
        self.modes[pin as usize] = Some(mode);
        Ok(())
    }

    fn digital_write(&mut self, pin: Pin, state: PinState) -> Result<(), HardwareError> {
        self.check(pin, HardwareError::PinWrite(pin))?;

        let previous = self.levels[pin as usize].replace(state);
        if pin == Pin::Step
            && state == PinState::StepActive
            && previous != Some(PinState::StepActive)
        {
            self.step_pulses += 1;
            if self.motor_enabled() {
                match self.level(Pin::Dir) {
                    Some(PinState::DirBackward) => self.carriage -= 1,
                    _ => self.carriage += 1,
                }
            }
        }
        Ok(())
    }

    fn digital_read(&mut self, pin: Pin) -> Result<PinState, HardwareError> {
        self.check(pin, HardwareError::PinRead(pin))?;

        if pin == Pin::Home {
            if let Some(state) = self.home_override {
                return Ok(state);
            }
            return Ok(if self.carriage <= 0 {
                PinState::HomeActive
            } else {
                PinState::HomeInactive
            });
        }
        self.level(pin).ok_or(HardwareError::PinRead(pin))
    }
}
