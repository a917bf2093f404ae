//! The closed set of engine states.

use core::fmt;

/// Engine state. Each frame on the [`StateStack`](super::StateStack) names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Idle floor state: poll the network for commands.
    AcceptCommands,
    /// Step the motor a stored number of times.
    DoSteps,
    /// Release the STEP line and hold.
    StepperInactiveAndWait,
    /// Assert the STEP line and hold.
    StepperActiveAndWait,
    /// Change the DIR line if needed.
    SetDir,
    /// Move to a stored absolute position.
    Moving,
    /// Seek backwards until the home switch closes.
    StopAtHome,
    /// Low power idle.
    Sleep,
    /// Report a fault and recover.
    ErrorState,
}

impl State {
    /// All states, in declaration order.
    pub const ALL: [State; 9] = [
        State::AcceptCommands,
        State::DoSteps,
        State::StepperInactiveAndWait,
        State::StepperActiveAndWait,
        State::SetDir,
        State::Moving,
        State::StopAtHome,
        State::Sleep,
        State::ErrorState,
    ];

    /// The state after this one in declaration order, `None` after the last.
    pub fn next(self) -> Option<State> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// Wire name used in `State:` status lines.
    pub const fn name(self) -> &'static str {
        match self {
            State::AcceptCommands => "ACCEPTING_COMMANDS",
            State::DoSteps => "DO_STEPS",
            State::StepperInactiveAndWait => "STEPPER_INACTIVE",
            State::StepperActiveAndWait => "STEPPER_ACTIVE",
            State::SetDir => "SET_DIR",
            State::Moving => "MOVING",
            State::StopAtHome => "STOP_AT_HOME",
            State::Sleep => "LOW_POWER",
            State::ErrorState => "ERROR",
        }
    }

    /// Whether the state is a short-lived helper pushed by another state.
    ///
    /// Transient states are never reported as the focuser's mode.
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            State::DoSteps
                | State::StepperInactiveAndWait
                | State::StepperActiveAndWait
                | State::SetDir
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
