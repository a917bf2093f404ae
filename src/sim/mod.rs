//! Simulated hardware, network and clock for running the engine on a host.
//!
//! [`SimFirmware`] wires a [`Focuser`](crate::focuser::Focuser) to in-memory
//! interfaces and drives it with a virtual clock: advancing time calls
//! `loop_once` until the requested waits add up to the advance.

mod debug;
mod firmware;
mod hardware;
mod net;

pub use debug::SimDebug;
pub use firmware::{SimFirmware, SimFocuser};
pub use hardware::SimHardware;
pub use net::SimNet;
