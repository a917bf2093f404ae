//! Captured diagnostic output.

use crate::interface::DebugInterface;

/// Debug sink that keeps everything written to it.
#[derive(Debug, Clone, Default)]
pub struct SimDebug {
    bytes: Vec<u8>,
    echo: bool,
}

impl SimDebug {
    /// Empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also copy diagnostics to stderr as they arrive.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Everything captured so far.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }

    /// Number of complete lines captured.
    pub fn line_count(&self) -> usize {
        self.bytes.iter().filter(|&&b| b == b'\n').count()
    }
}

impl DebugInterface for SimDebug {
    fn raw_write(&mut self, bytes: &[u8]) {
        if self.echo {
            eprint!("{}", String::from_utf8_lossy(bytes));
        }
        self.bytes.extend_from_slice(bytes);
    }
}
