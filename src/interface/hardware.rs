//! Digital pin abstraction for the stepper driver and home switch.

use crate::error::HardwareError;

/// Logical pins used by the focuser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    /// Stepper driver STEP input.
    Step,
    /// Stepper driver DIR input.
    Dir,
    /// Stepper driver enable line.
    MotorEnable,
    /// Home (end-stop) switch.
    Home,
}

impl Pin {
    /// Pin name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Pin::Step => "STEP",
            Pin::Dir => "DIR",
            Pin::MotorEnable => "MOTOR_ENA",
            Pin::Home => "HOME",
        }
    }
}

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinIoMode {
    /// Pin is sampled.
    Input,
    /// Pin is driven.
    Output,
}

/// Semantic pin states.
///
/// The engine speaks in what a level *means*; the electrical polarity of each
/// meaning is decided by the [`HardwareInterface`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// DIR set to count up.
    DirForward,
    /// DIR set to count down.
    DirBackward,
    /// STEP pulse asserted.
    StepActive,
    /// STEP pulse released.
    StepInactive,
    /// Coils energized.
    MotorOn,
    /// Coils released.
    MotorOff,
    /// Home switch closed.
    HomeActive,
    /// Home switch open.
    HomeInactive,
}

impl PinState {
    /// Electrical level for this state: `true` is high.
    ///
    /// Step is active high, direction forward is high, the motor enable line
    /// is active low (A4988/DRV8825 style) and the home switch pulls low.
    pub fn is_high(self) -> bool {
        match self {
            PinState::DirForward | PinState::StepActive | PinState::MotorOff => true,
            PinState::HomeInactive => true,
            PinState::DirBackward | PinState::StepInactive | PinState::MotorOn => false,
            PinState::HomeActive => false,
        }
    }
}

/// Hardware interface consumed by the focuser engine.
pub trait HardwareInterface {
    /// Configure the direction of a pin.
    fn pin_mode(&mut self, pin: Pin, mode: PinIoMode) -> Result<(), HardwareError>;

    /// Drive an output pin.
    fn digital_write(&mut self, pin: Pin, state: PinState) -> Result<(), HardwareError>;

    /// Sample an input pin.
    fn digital_read(&mut self, pin: Pin) -> Result<PinState, HardwareError>;
}
