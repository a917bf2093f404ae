//! Property tests for the state stack.

use proptest::prelude::*;

use beefocus::state::{
    State, StateArg, StateStack, DIAG_STACK_OVERFLOW, DIAG_STACK_UNDERFLOW, MAX_DEPTH,
};

#[derive(Debug, Clone)]
enum Op {
    Push(State, i32),
    Pop,
    Reset,
    SetArg(i32),
}

fn state_strategy() -> impl Strategy<Value = State> {
    (0..State::ALL.len()).prop_map(|i| State::ALL[i])
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (state_strategy(), any::<i32>()).prop_map(|(s, a)| Op::Push(s, a)),
        3 => Just(Op::Pop),
        1 => Just(Op::Reset),
        1 => any::<i32>().prop_map(Op::SetArg),
    ]
}

proptest! {
    /// Any sequence of operations keeps the depth within bounds.
    #[test]
    fn prop_depth_stays_in_bounds(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut stack = StateStack::new();
        for op in ops {
            match op {
                Op::Push(state, arg) => stack.push(state, arg),
                Op::Pop => stack.pop(),
                Op::Reset => stack.reset(),
                Op::SetArg(arg) => stack.top_arg_set(arg),
            }
            prop_assert!(stack.depth() >= 1);
            prop_assert!(stack.depth() <= MAX_DEPTH);
        }
    }

    /// Reset always leaves exactly the floor frame.
    #[test]
    fn prop_reset_restores_floor(ops in prop::collection::vec(op_strategy(), 0..50)) {
        let mut stack = StateStack::new();
        for op in ops {
            if let Op::Push(state, arg) = op {
                stack.push(state, arg);
            }
        }
        stack.reset();
        prop_assert_eq!(stack.depth(), 1);
        prop_assert_eq!(stack.top_state(), State::AcceptCommands);
        prop_assert_eq!(stack.top_arg(), StateArg::None);
    }

    /// A push below capacity is visible on top until popped.
    #[test]
    fn prop_push_then_pop(state in state_strategy(), arg in any::<i32>()) {
        let mut stack = StateStack::new();
        stack.push(state, arg);
        prop_assert_eq!(stack.top_state(), state);
        prop_assert_eq!(stack.top_arg(), StateArg::Int(arg));
        stack.pop();
        prop_assert_eq!(stack.depth(), 1);
        prop_assert_eq!(stack.top_state(), State::AcceptCommands);
    }
}

#[test]
fn test_overflow_reports_error_frame() {
    let mut stack = StateStack::new();
    for i in 0..MAX_DEPTH as i32 {
        stack.push(State::DoSteps, i);
    }

    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.top_state(), State::ErrorState);
    assert_eq!(stack.top_arg(), StateArg::Int(DIAG_STACK_OVERFLOW));
}

#[test]
fn test_underflow_reports_error_frame() {
    let mut stack = StateStack::new();
    stack.pop();

    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.top_state(), State::ErrorState);
    assert_eq!(stack.top_arg(), StateArg::Int(DIAG_STACK_UNDERFLOW));
}

#[test]
fn test_iter_is_top_first() {
    let mut stack = StateStack::new();
    stack.push_state(State::Moving);
    stack.push_state(State::DoSteps);

    let states: Vec<State> = stack.iter().map(|f| f.state).collect();
    assert_eq!(states, [State::DoSteps, State::Moving, State::AcceptCommands]);
}
