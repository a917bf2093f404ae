//! `HardwareInterface` over embedded-hal 1.0 pins.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::HardwareError;

use super::hardware::{HardwareInterface, Pin, PinIoMode, PinState};

/// Hardware interface backed by embedded-hal pins.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `ENA`: motor enable pin type (must implement `OutputPin`)
/// - `HOME`: home switch pin type (must implement `InputPin`)
///
/// embedded-hal pins carry their direction in their type, so
/// [`pin_mode`](HardwareInterface::pin_mode) only checks that the requested
/// mode matches the pin's role.
pub struct HalHardware<STEP, DIR, ENA, HOME>
where
    STEP: OutputPin,
    DIR: OutputPin,
    ENA: OutputPin,
    HOME: InputPin,
{
    step_pin: STEP,
    dir_pin: DIR,
    enable_pin: ENA,
    home_pin: HOME,
}

impl<STEP, DIR, ENA, HOME> HalHardware<STEP, DIR, ENA, HOME>
where
    STEP: OutputPin,
    DIR: OutputPin,
    ENA: OutputPin,
    HOME: InputPin,
{
    /// Wrap the four pins.
    pub fn new(step_pin: STEP, dir_pin: DIR, enable_pin: ENA, home_pin: HOME) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            home_pin,
        }
    }

    /// Give the pins back.
    pub fn release(self) -> (STEP, DIR, ENA, HOME) {
        (self.step_pin, self.dir_pin, self.enable_pin, self.home_pin)
    }

    fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), P::Error> {
        if high {
            pin.set_high()
        } else {
            pin.set_low()
        }
    }
}

impl<STEP, DIR, ENA, HOME> HardwareInterface for HalHardware<STEP, DIR, ENA, HOME>
where
    STEP: OutputPin,
    DIR: OutputPin,
    ENA: OutputPin,
    HOME: InputPin,
{
    fn pin_mode(&mut self, pin: Pin, mode: PinIoMode) -> Result<(), HardwareError> {
        let expected = match pin {
            Pin::Home => PinIoMode::Input,
            Pin::Step | Pin::Dir | Pin::MotorEnable => PinIoMode::Output,
        };
        if mode == expected {
            Ok(())
        } else {
            Err(HardwareError::PinMode(pin))
        }
    }

    fn digital_write(&mut self, pin: Pin, state: PinState) -> Result<(), HardwareError> {
        let high = state.is_high();
        let result = match pin {
            Pin::Step => Self::drive(&mut self.step_pin, high).map_err(|_| ()),
            Pin::Dir => Self::drive(&mut self.dir_pin, high).map_err(|_| ()),
            Pin::MotorEnable => Self::drive(&mut self.enable_pin, high).map_err(|_| ()),
            Pin::Home => Err(()),
        };
        result.map_err(|_| HardwareError::PinWrite(pin))
    }

    fn digital_read(&mut self, pin: Pin) -> Result<PinState, HardwareError> {
        if pin != Pin::Home {
            return Err(HardwareError::PinRead(pin));
        }
        let high = self
            .home_pin
            .is_high()
            .map_err(|_| HardwareError::PinRead(pin))?;
        Ok(if high {
            PinState::HomeInactive
        } else {
            PinState::HomeActive
        })
    }
}
