//! Unit test harness for beefocus.
//!
//! This module organizes unit tests for each component of the library.

mod command_parsing;
mod config_parsing;
mod config_validation;
mod hal_hardware;
mod state_stack;
