//! In-memory line transport.

use std::collections::VecDeque;

use crate::interface::{DebugInterface, Line, NetInterface};

/// Network interface backed by two in-memory buffers.
///
/// Inbound text is split on `\n`; a trailing fragment waits for the rest of
/// its line. Lines longer than [`LINE_CAPACITY`](crate::interface::LINE_CAPACITY)
/// are dropped whole rather than truncated.
#[derive(Debug, Default)]
pub struct SimNet {
    inbound: VecDeque<Line>,
    partial: Line,
    overflowed: bool,
    outbound: String,
}

impl SimNet {
    /// Empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed text as if it arrived from the host.
    pub fn receive(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' => {
                    let line = core::mem::take(&mut self.partial);
                    if !core::mem::take(&mut self.overflowed) {
                        self.inbound.push_back(line);
                    }
                }
                '\r' => {}
                _ => {
                    if self.partial.push(c).is_err() {
                        self.overflowed = true;
                    }
                }
            }
        }
    }

    /// Complete lines not yet read by the firmware.
    pub fn pending(&self) -> usize {
        self.inbound.len()
    }

    /// Everything the firmware has written and nobody has taken yet.
    pub fn output(&self) -> &str {
        &self.outbound
    }

    /// Take everything the firmware has written.
    pub fn take_output(&mut self) -> String {
        core::mem::take(&mut self.outbound)
    }

    /// Take the first complete line the firmware has written.
    pub fn take_output_line(&mut self) -> Option<Line> {
        let end = self.outbound.find('\n')?;
        let rest = self.outbound.split_off(end + 1);
        let mut line = core::mem::replace(&mut self.outbound, rest);
        line.truncate(end);

        let mut out = Line::new();
        for c in line.chars() {
            if out.push(c).is_err() {
                break;
            }
        }
        Some(out)
    }
}

impl NetInterface for SimNet {
    fn setup(&mut self, debug: &mut dyn DebugInterface) {
        debug.raw_write(b"Simulated network ready\n");
    }

    fn get_line(&mut self) -> Option<Line> {
        self.inbound.pop_front()
    }

    fn write(&mut self, text: &str) {
        self.outbound.push_str(text);
    }
}
