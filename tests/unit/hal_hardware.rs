//! Unit tests for the embedded-hal hardware adapter.

use embedded_hal_mock::eh1::MockError;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as Level, Transaction as PinTx};

use beefocus::{HalHardware, HardwareError, HardwareInterface, Pin, PinIoMode, PinState};

fn idle_pin() -> PinMock {
    PinMock::new(&[])
}

fn finish(hw: HalHardware<PinMock, PinMock, PinMock, PinMock>) {
    let (mut step, mut dir, mut ena, mut home) = hw.release();
    step.done();
    dir.done();
    ena.done();
    home.done();
}

/// Test the electrical level of each output state.
#[test]
fn test_output_levels() {
    let step = PinMock::new(&[PinTx::set(Level::High), PinTx::set(Level::Low)]);
    let dir = PinMock::new(&[PinTx::set(Level::High), PinTx::set(Level::Low)]);
    let ena = PinMock::new(&[PinTx::set(Level::Low), PinTx::set(Level::High)]);
    let mut hw = HalHardware::new(step, dir, ena, idle_pin());

    hw.digital_write(Pin::Step, PinState::StepActive).unwrap();
    hw.digital_write(Pin::Step, PinState::StepInactive).unwrap();
    hw.digital_write(Pin::Dir, PinState::DirForward).unwrap();
    hw.digital_write(Pin::Dir, PinState::DirBackward).unwrap();
    hw.digital_write(Pin::MotorEnable, PinState::MotorOn).unwrap();
    hw.digital_write(Pin::MotorEnable, PinState::MotorOff).unwrap();

    finish(hw);
}

/// Test that the home switch is active low.
#[test]
fn test_home_switch_active_low() {
    let home = PinMock::new(&[PinTx::get(Level::Low), PinTx::get(Level::High)]);
    let mut hw = HalHardware::new(idle_pin(), idle_pin(), idle_pin(), home);

    assert_eq!(hw.digital_read(Pin::Home), Ok(PinState::HomeActive));
    assert_eq!(hw.digital_read(Pin::Home), Ok(PinState::HomeInactive));

    finish(hw);
}

/// Test that pin modes must match each pin's role.
#[test]
fn test_pin_mode_checks_role() {
    let mut hw = HalHardware::new(idle_pin(), idle_pin(), idle_pin(), idle_pin());

    assert!(hw.pin_mode(Pin::Step, PinIoMode::Output).is_ok());
    assert!(hw.pin_mode(Pin::Home, PinIoMode::Input).is_ok());
    assert_eq!(
        hw.pin_mode(Pin::Home, PinIoMode::Output),
        Err(HardwareError::PinMode(Pin::Home))
    );
    assert_eq!(
        hw.pin_mode(Pin::Dir, PinIoMode::Input),
        Err(HardwareError::PinMode(Pin::Dir))
    );

    finish(hw);
}

/// Test that writing the input and reading an output are refused.
#[test]
fn test_wrong_direction_access() {
    let mut hw = HalHardware::new(idle_pin(), idle_pin(), idle_pin(), idle_pin());

    assert_eq!(
        hw.digital_write(Pin::Home, PinState::HomeActive),
        Err(HardwareError::PinWrite(Pin::Home))
    );
    assert_eq!(hw.digital_read(Pin::Step), Err(HardwareError::PinRead(Pin::Step)));

    finish(hw);
}

/// Test that a failing HAL pin surfaces as a hardware error.
#[test]
fn test_hal_error_maps_to_pin_write() {
    let dir = PinMock::new(&[PinTx::set(Level::High).with_error(MockError::Io(std::io::ErrorKind::Other))]);
    let mut hw = HalHardware::new(idle_pin(), dir, idle_pin(), idle_pin());

    assert_eq!(
        hw.digital_write(Pin::Dir, PinState::DirForward),
        Err(HardwareError::PinWrite(Pin::Dir))
    );

    finish(hw);
}
