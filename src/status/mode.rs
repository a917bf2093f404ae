//! Focuser modes as seen by the host.

/// Mode reported by a `State:` status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// No report received yet.
    #[default]
    Unconnected,
    /// Idle and ready.
    AcceptCommands,
    /// Moving to a position.
    Moving,
    /// Seeking the home switch.
    Homing,
    /// Idle with the motor released.
    LowPower,
    /// Firmware reported a mode this side does not know.
    Error,
}

impl Mode {
    /// Map the noun of a `State:` line. Unknown nouns map to [`Mode::Error`].
    pub fn from_status_noun(noun: &str) -> Self {
        match noun {
            "ACCEPTING_COMMANDS" => Mode::AcceptCommands,
            "MOVING" => Mode::Moving,
            "STOP_AT_HOME" => Mode::Homing,
            "LOW_POWER" => Mode::LowPower,
            _ => Mode::Error,
        }
    }

    /// Text for a user-facing status display.
    pub fn friendly_name(self) -> &'static str {
        match self {
            Mode::Unconnected => " ",
            Mode::AcceptCommands => "Ready",
            Mode::Moving => "Moving",
            Mode::Homing => "Searching for Home Position",
            Mode::LowPower => "Ready (Low Power Mode)",
            Mode::Error => "Error",
        }
    }
}
