//! The focuser engine.
//!
//! A cooperative state machine. [`Focuser::loop_once`] runs the handler of the
//! state on top of the [`StateStack`](crate::state::StateStack), does one small
//! unit of work and returns how long the caller should wait before calling
//! again. Commands arriving on the network either push new frames or, when
//! they interrupt, throw the current frames away first.

/// Write one diagnostic line to the focuser's debug interface.
macro_rules! diag {
    ($focuser:expr, $($arg:tt)*) => {{
        let _ = ::core::fmt::Write::write_fmt(
            &mut $crate::interface::DebugWriter(&mut $focuser.debug),
            format_args!($($arg)*),
        );
        $crate::interface::DebugInterface::raw_write(&mut $focuser.debug, b"\n");
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

/// Write one status line to the focuser's network interface.
macro_rules! reply {
    ($focuser:expr, $($arg:tt)*) => {{
        let _ = ::core::fmt::Write::write_fmt(
            &mut $crate::interface::NetWriter(&mut $focuser.net),
            format_args!($($arg)*),
        );
        $crate::interface::NetInterface::write(&mut $focuser.net, "\n");
    }};
}

mod commands;
mod engine;
mod states;

pub use engine::{Focuser, MotorState, DIAG_BAD_ARG, FIRMWARE_VERSION};
