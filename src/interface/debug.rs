//! Raw diagnostic byte sink.

use core::fmt;

/// Debug interface consumed by the focuser engine.
pub trait DebugInterface {
    /// Emit diagnostic bytes.
    fn raw_write(&mut self, bytes: &[u8]);
}

/// `core::fmt::Write` adapter over a [`DebugInterface`].
pub struct DebugWriter<'a, D: DebugInterface + ?Sized>(pub &'a mut D);

impl<D: DebugInterface + ?Sized> fmt::Write for DebugWriter<'_, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.raw_write(s.as_bytes());
        Ok(())
    }
}
