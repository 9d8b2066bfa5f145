//! Collecting a batch's diagnostics before they are printed.
//!
//! The queue orders diagnostics by source position, drops exact repeats
//! and enforces an error limit. A diagnostic is only ever dropped as a
//! repeat when another one already reports the same code and message at
//! the same span; distinct errors that share a line are all kept.

use cmm_ir::Span;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// How a [`DiagnosticQueue`] limits and filters what it keeps.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Most diagnostics kept; 0 keeps all of them.
    pub error_limit: usize,
    /// Drop a diagnostic that repeats one already queued (same span, code
    /// and message).
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep every diagnostic, repeats included.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct Positioned {
    line: u32,
    column: u32,
    diagnostic: Diagnostic,
}

/// Diagnostics of one batch, with the 1-based position each was reported at.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    entries: Vec<Positioned>,
    /// Distinct diagnostics rejected by the error limit.
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            entries: Vec::new(),
            dropped: 0,
            config,
        }
    }

    /// Queue `diagnostic`, reported at 1-based `line` and `column`.
    ///
    /// Returns proof of the error when it was kept, `None` when it repeats
    /// a queued diagnostic or the error limit is reached.
    pub fn add(
        &mut self,
        diagnostic: Diagnostic,
        line: u32,
        column: u32,
    ) -> Option<ErrorGuaranteed> {
        if self.config.deduplicate
            && self
                .entries
                .iter()
                .any(|queued| queued.diagnostic.same_report(&diagnostic))
        {
            return None;
        }

        if self.config.error_limit > 0 && self.entries.len() >= self.config.error_limit {
            self.dropped += 1;
            return None;
        }

        self.entries.push(Positioned {
            line,
            column,
            diagnostic,
        });
        Some(ErrorGuaranteed::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct diagnostics the error limit rejected.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Proof of an error if anything was queued.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.entries.len())
    }

    /// Notice for the diagnostics the limit rejected, pointing at `span`.
    /// `None` when nothing was dropped.
    pub fn limit_notice(&self, span: Span) -> Option<Diagnostic> {
        (self.dropped > 0).then(|| {
            let plural = if self.dropped == 1 { "" } else { "s" };
            Diagnostic::new(
                ErrorCode::E9001,
                span,
                format!("{} more error{plural} not shown", self.dropped),
            )
            .with_note(format!("error limit is {}", self.config.error_limit))
        })
    }

    /// The queued diagnostics ordered by line, then column. Diagnostics at
    /// the same position keep the order they were added in.
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.entries.sort_by_key(|queued| (queued.line, queued.column));
        self.entries
            .into_iter()
            .map(|queued| queued.diagnostic)
            .collect()
    }
}

#[cfg(test)]
mod tests;
