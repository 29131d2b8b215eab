use crate::core::{OutputArtifact, ProductEntry, ProgressSink};
use std::io::Write;

/// Prints the zero-based index of each finished entry on its own line.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl ConsoleProgress<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn entry_completed(&mut self, index: usize, entry: &ProductEntry, _outputs: &[OutputArtifact]) {
        if let Err(e) = writeln!(self.out, "{}", index) {
            tracing::warn!("Failed to report progress for '{}': {}", entry.identifier, e);
        }
    }
}
