//! Injected collaborator interfaces.
//!
//! The focuser engine never touches hardware, sockets or a console directly.
//! It owns one implementation of each trait here, handed over at construction,
//! which is what lets the simulated-time harness stand in for a real board.

mod debug;
mod hal;
mod hardware;
mod net;

pub use debug::{DebugInterface, DebugWriter};
pub use hal::HalHardware;
pub use hardware::{HardwareInterface, Pin, PinIoMode, PinState};
pub use net::{Line, NetInterface, NetWriter, LINE_CAPACITY};
