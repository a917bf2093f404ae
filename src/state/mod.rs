//! Engine control state: the state enum, stacked arguments and the stack.

mod arg;
mod kind;
mod stack;

pub use arg::{Direction, StateArg};
pub use kind::State;
pub use stack::{StateFrame, StateStack, DIAG_STACK_OVERFLOW, DIAG_STACK_UNDERFLOW, MAX_DEPTH};
