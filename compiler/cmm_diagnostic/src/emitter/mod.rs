//! Printing diagnostics.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use std::io;

use crate::Diagnostic;

/// Destination for the diagnostics of one batch.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        diagnostics
            .iter()
            .try_for_each(|diagnostic| self.emit(diagnostic))
    }

    /// Close the batch: report how many errors were found, then flush.
    fn finish(&mut self, error_count: usize) -> io::Result<()>;
}
