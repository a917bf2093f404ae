//! Wire commands: tokenizing incoming lines and the per-command interrupt table.

mod parser;

pub use parser::{check_for_commands, parse_line, Command, CommandPacket};
