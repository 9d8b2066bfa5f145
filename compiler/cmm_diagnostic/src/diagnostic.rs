//! Renderable form of a Cmm error.

use std::fmt;

use cmm_ir::Span;

use crate::ErrorCode;

/// One error, ready to print: a code, a headline, the source it points at
/// and optional notes.
///
/// Every Cmm diagnostic is an error. Built by
/// `TypeCheckError::to_diagnostic` and by the error-limit notice.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic does nothing until it is queued or emitted"]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// Headline, printed after the code.
    pub message: String,
    /// Source the error points at.
    pub span: Span,
    /// Short text printed under the pointed-at source; may be empty.
    pub label: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            span,
            label: String::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Whether `other` reports the same problem at the same place.
    ///
    /// Labels and notes are ignored: they elaborate the message.
    pub fn same_report(&self, other: &Diagnostic) -> bool {
        self.code == other.code && self.span == other.span && self.message == other.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.span, self.message)?;
        for note in &self.notes {
            write!(f, "; {note}")?;
        }
        Ok(())
    }
}
