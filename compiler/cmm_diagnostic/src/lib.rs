//! Reporting layer for Cmm type errors.
//!
//! The checker records structured errors. This crate turns them into
//! output a person reads:
//! - [`ErrorCode`]: stable code per kind of error
//! - [`Diagnostic`]: code, message, span, label and notes
//! - [`DiagnosticQueue`]: ordering, repeat removal and the error limit
//! - [`emitter`]: terminal rendering with source excerpts
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is proof that an error was recorded. The queue
//! hands one out for every diagnostic it keeps.
//!
//! ```text
//! if let Some(guarantee) = queue.add(diagnostic, line, column) { .. }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
