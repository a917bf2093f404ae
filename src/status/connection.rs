//! Host-side view of the link to a focuser.

use core::fmt::Write;

use crate::command::CommandPacket;
use crate::interface::Line;

/// A line-oriented link to the firmware, seen from the host.
pub trait Connection {
    /// Next complete line from the firmware, if one is ready. Never blocks.
    fn read_line(&mut self) -> Option<Line>;

    /// Send raw text to the firmware.
    fn send(&mut self, text: &str);

    /// Send one command in its wire form.
    fn send_command(&mut self, packet: CommandPacket) {
        let mut line = Line::new();
        // The longest command, `REL_POS=-2147483648\n`, fits in a line.
        let _ = writeln!(line, "{}", packet);
        self.send(&line);
    }
}
