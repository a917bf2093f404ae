//! Consumer side of the line protocol.
//!
//! Turns `"<Verb>: <Noun>"` status lines from the firmware back into
//! structured, individually optional fields.

mod connection;
mod hardware_state;
mod mode;

pub use connection::Connection;
pub use hardware_state::HardwareState;
pub use mode::Mode;
