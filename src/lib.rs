//! # beefocus
//!
//! Cooperative state-machine core for a WiFi stepper-motor telescope focuser.
//!
//! ## Features
//!
//! - **Non-blocking**: [`Focuser::loop_once`] does one bounded unit of work and
//!   returns how long the caller should wait
//! - **Stack-driven**: nested motions are frames on a bounded [`StateStack`]
//! - **Pre-emptible**: interrupting commands are checked between step batches
//! - **Injected I/O**: pins, network and diagnostics come in through traits
//! - **embedded-hal 1.0**: [`HalHardware`] drives real `OutputPin`/`InputPin`s
//! - **no_std compatible**: the engine works without the standard library
//! - **Simulated time** (std): [`sim::SimFirmware`] runs multi-second motions
//!   in microseconds of test time
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use beefocus::{Build, BuildParams, Focuser, HalHardware};
//!
//! let hardware = HalHardware::new(step_pin, dir_pin, enable_pin, home_pin);
//! let mut focuser = Focuser::new(net, hardware, debug, Build::TraditionalFocuser.into());
//!
//! loop {
//!     let wait_us = focuser.loop_once();
//!     delay.delay_us(wait_us);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML configuration files and the simulator
//! - `defmt`: Mirrors diagnostics to defmt for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod command;
pub mod config;
pub mod error;
pub mod focuser;
pub mod interface;
pub mod state;
pub mod status;

// Host simulation (std only)
#[cfg(feature = "std")]
pub mod sim;

// Re-exports for ergonomic API
pub use command::{parse_line, Command, CommandPacket};
pub use config::{validate_build_params, Build, BuildParams, FocuserConfig, TimingParams};
pub use error::{ConfigError, Error, HardwareError, Result};
pub use focuser::{Focuser, MotorState, FIRMWARE_VERSION};
pub use interface::{
    DebugInterface, HalHardware, HardwareInterface, Line, NetInterface, Pin, PinIoMode, PinState,
};
pub use state::{Direction, State, StateArg, StateStack};
pub use status::{Connection, HardwareState, Mode};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
