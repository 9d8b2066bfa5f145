//! Turning recorded type errors into rendered diagnostics.

use std::io;

use cmm_diagnostic::emitter::DiagnosticEmitter;
use cmm_diagnostic::span_utils::LineOffsetTable;
use cmm_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorGuaranteed};
use cmm_ir::{Span, StringInterner};
use cmm_types::TypedExpr;

/// Diagnostics for a whole batch, sorted by source position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// Kept diagnostics, followed by the error-limit notice if any were
    /// dropped.
    pub diagnostics: Vec<Diagnostic>,
    /// Distinct errors the error limit left out.
    pub dropped: usize,
    error_count: usize,
    guarantee: Option<ErrorGuaranteed>,
}

impl Report {
    /// Distinct type errors found, shown or not. Exact repeats count once.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Proof that at least one error is being reported.
    pub fn error_guarantee(&self) -> Option<ErrorGuaranteed> {
        self.guarantee
    }
}

/// Collect the errors of every checked tree through a [`DiagnosticQueue`]
/// configured by `config`.
///
/// `source` is the text every tree's spans point into.
pub fn collect_diagnostics(
    results: &[TypedExpr],
    interner: &StringInterner,
    source: &str,
    config: &DiagnosticConfig,
) -> Report {
    let table = LineOffsetTable::build(source);
    let mut queue = DiagnosticQueue::with_config(config.clone());
    let mut last_span = Span::DUMMY;

    for error in results.iter().flat_map(TypedExpr::errors) {
        last_span = error.span;
        let (line, column) = table.offset_to_line_col(source, error.span.start);
        if queue.add(error.to_diagnostic(interner), line, column).is_none() {
            tracing::debug!(code = %error.code(), span = %error.span, "diagnostic not kept");
        }
    }

    let guarantee = queue.has_errors();
    let dropped = queue.dropped();
    let notice = queue.limit_notice(last_span);
    let mut diagnostics = queue.into_sorted();
    let error_count = diagnostics.len() + dropped;
    diagnostics.extend(notice);

    Report {
        diagnostics,
        dropped,
        error_count,
        guarantee,
    }
}

/// Render a report followed by its summary line.
pub fn emit_report(report: &Report, emitter: &mut impl DiagnosticEmitter) -> io::Result<()> {
    emitter.emit_all(&report.diagnostics)?;
    emitter.finish(report.error_count())
}
