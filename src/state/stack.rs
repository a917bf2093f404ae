//! Bounded LIFO of engine states.

use heapless::Vec;

use super::arg::StateArg;
use super::kind::State;

/// Maximum number of frames the stack ever holds.
pub const MAX_DEPTH: usize = 10;

/// `ERROR_STATE` argument pushed when a push would exceed [`MAX_DEPTH`].
pub const DIAG_STACK_OVERFLOW: i32 = 1;

/// `ERROR_STATE` argument pushed when a pop removed the floor frame.
pub const DIAG_STACK_UNDERFLOW: i32 = 2;

/// One stacked state and its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateFrame {
    /// State to run.
    pub state: State,
    /// Payload for that state.
    pub arg: StateArg,
}

impl StateFrame {
    const FLOOR: StateFrame = StateFrame {
        state: State::AcceptCommands,
        arg: StateArg::None,
    };
}

/// Stack of engine states.
///
/// Never empty and never deeper than [`MAX_DEPTH`]. Misuse does not panic:
/// an overflowing push or a pop of the floor frame rebuilds the floor and
/// pushes an `ERROR_STATE` frame carrying a diagnostic code, so the engine
/// reports the fault on its next tick and then carries on accepting commands.
#[derive(Debug, Clone)]
pub struct StateStack {
    frames: Vec<StateFrame, MAX_DEPTH>,
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStack {
    /// Create a stack holding only `(ACCEPT_COMMANDS, None)`.
    pub fn new() -> Self {
        let mut stack = Self { frames: Vec::new() };
        stack.reset();
        stack
    }

    /// Push a state with its argument.
    pub fn push(&mut self, state: State, arg: impl Into<StateArg>) {
        let frame = StateFrame {
            state,
            arg: arg.into(),
        };
        if self.frames.push(frame).is_err() {
            self.fault(DIAG_STACK_OVERFLOW);
        }
    }

    /// Push a state with no argument.
    pub fn push_state(&mut self, state: State) {
        self.push(state, StateArg::None);
    }

    /// Remove the top frame.
    pub fn pop(&mut self) {
        self.frames.pop();
        if self.frames.is_empty() {
            self.fault(DIAG_STACK_UNDERFLOW);
        }
    }

    /// State of the top frame.
    pub fn top_state(&self) -> State {
        self.top().state
    }

    /// Argument of the top frame.
    pub fn top_arg(&self) -> StateArg {
        self.top().arg
    }

    /// Replace the argument of the top frame.
    pub fn top_arg_set(&mut self, arg: impl Into<StateArg>) {
        let arg = arg.into();
        match self.frames.last_mut() {
            Some(frame) => frame.arg = arg,
            None => self.reset(),
        }
    }

    /// Discard everything down to the floor frame.
    pub fn reset(&mut self) {
        self.frames.clear();
        // Capacity is at least one, so this cannot fail.
        let _ = self.frames.push(StateFrame::FLOOR);
    }

    /// Number of frames on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Frames from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &StateFrame> {
        self.frames.iter().rev()
    }

    fn top(&self) -> StateFrame {
        self.frames.last().copied().unwrap_or(StateFrame::FLOOR)
    }

    fn fault(&mut self, code: i32) {
        self.reset();
        let _ = self.frames.push(StateFrame {
            state: State::ErrorState,
            arg: StateArg::Int(code),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;

    #[test]
    fn test_new_stack_holds_floor() {
        let stack = StateStack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top_state(), State::AcceptCommands);
        assert_eq!(stack.top_arg(), StateArg::None);
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = StateStack::new();
        stack.push(State::Moving, 1234);
        stack.push(State::SetDir, Direction::Reverse);

        assert_eq!(stack.top_state(), State::SetDir);
        assert_eq!(stack.top_arg().dir(), Some(Direction::Reverse));
        stack.pop();
        assert_eq!(stack.top_state(), State::Moving);
        assert_eq!(stack.top_arg().int(), Some(1234));
        stack.pop();
        assert_eq!(stack.top_state(), State::AcceptCommands);
    }

    #[test]
    fn test_top_arg_set_rewrites_top_only() {
        let mut stack = StateStack::new();
        stack.push(State::DoSteps, 10);
        stack.push(State::DoSteps, 3);
        stack.top_arg_set(2);

        assert_eq!(stack.top_arg(), StateArg::Int(2));
        stack.pop();
        assert_eq!(stack.top_arg(), StateArg::Int(10));
    }

    #[test]
    fn test_pop_of_floor_reports_underflow() {
        let mut stack = StateStack::new();
        stack.pop();

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top_state(), State::ErrorState);
        assert_eq!(stack.top_arg(), StateArg::Int(DIAG_STACK_UNDERFLOW));
        stack.pop();
        assert_eq!(stack.top_state(), State::AcceptCommands);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_overflow_rebuilds_floor_with_error() {
        let mut stack = StateStack::new();
        for i in 0..MAX_DEPTH as i32 {
            stack.push(State::Moving, i);
        }

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top_state(), State::ErrorState);
        assert_eq!(stack.top_arg(), StateArg::Int(DIAG_STACK_OVERFLOW));
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut stack = StateStack::new();
        stack.push_state(State::StopAtHome);
        stack.push(State::DoSteps, 1);
        stack.push_state(State::StepperActiveAndWait);
        stack.reset();

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top_state(), State::AcceptCommands);
    }

    #[test]
    fn test_iter_runs_top_first() {
        let mut stack = StateStack::new();
        stack.push(State::Moving, 7);
        stack.push(State::DoSteps, 7);

        let states: heapless::Vec<State, MAX_DEPTH> = stack.iter().map(|f| f.state).collect();
        assert_eq!(states.as_slice(), &[State::DoSteps, State::Moving, State::AcceptCommands]);
    }
}
