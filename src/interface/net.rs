//! Line-oriented network transport.

use core::fmt;

use super::debug::DebugInterface;

/// Longest command or status line the firmware handles.
pub const LINE_CAPACITY: usize = 64;

/// One received line, without its terminator.
pub type Line = heapless::String<LINE_CAPACITY>;

/// Network interface consumed by the focuser engine.
pub trait NetInterface {
    /// Bring the transport up. Called once from `Focuser::new`.
    fn setup(&mut self, debug: &mut dyn DebugInterface) {
        let _ = debug;
    }

    /// Return the next completed line, if one has arrived. Never blocks.
    fn get_line(&mut self) -> Option<Line>;

    /// Queue characters for the far end.
    fn write(&mut self, text: &str);
}

/// `core::fmt::Write` adapter so replies can be built with `write!`.
pub struct NetWriter<'a, N: NetInterface + ?Sized>(pub &'a mut N);

impl<N: NetInterface + ?Sized> fmt::Write for NetWriter<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write(s);
        Ok(())
    }
}
