//! Per-frame payloads.

use core::fmt;

/// Direction of carriage motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Counting up.
    Forward,
    /// Counting down.
    Reverse,
}

impl Direction {
    /// Direction needed to cover a signed step delta. Zero counts as forward.
    #[inline]
    pub fn from_delta(delta: i32) -> Self {
        if delta >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Position change produced by one step in this direction.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Argument stored alongside a stacked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateArg {
    /// No payload.
    #[default]
    None,
    /// Step count, target position or diagnostic code.
    Int(i32),
    /// Direction for `SET_DIR`.
    Dir(Direction),
}

impl StateArg {
    /// The integer payload, if this is an `Int`.
    #[inline]
    pub fn int(self) -> Option<i32> {
        match self {
            StateArg::Int(value) => Some(value),
            _ => None,
        }
    }

    /// The direction payload, if this is a `Dir`.
    #[inline]
    pub fn dir(self) -> Option<Direction> {
        match self {
            StateArg::Dir(dir) => Some(dir),
            _ => None,
        }
    }
}

impl From<i32> for StateArg {
    fn from(value: i32) -> Self {
        StateArg::Int(value)
    }
}

impl From<Direction> for StateArg {
    fn from(dir: Direction) -> Self {
        StateArg::Dir(dir)
    }
}

impl fmt::Display for StateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateArg::None => Ok(()),
            StateArg::Int(value) => write!(f, "{}", value),
            StateArg::Dir(Direction::Forward) => f.write_str("FORWARD"),
            StateArg::Dir(Direction::Reverse) => f.write_str("REVERSE"),
        }
    }
}
