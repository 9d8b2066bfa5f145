//! Terminal output: each error is printed with the source line it points
//! at and a caret underline, when the source is available.

use std::io::{self, Write};

use cmm_ir::Span;

use super::DiagnosticEmitter;
use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

const RED: &str = "\x1b[1;31m";
const BLUE: &str = "\x1b[1;34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Whether to color terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Where a diagnostic lands in the attached source.
struct Excerpt<'src> {
    line: u32,
    column: u32,
    /// Full text of `line`, without its line break.
    text: &'src str,
    /// Underline width in characters; never zero.
    carets: usize,
}

/// Renders diagnostics as text.
///
/// With a source attached, every error shows its line and column, the
/// source line and an underline. Without one, or when a span does not fit
/// the source, the byte span is printed instead.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<(&'src str, LineOffsetTable)>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn new(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the text the diagnostics' spans point into.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some((source, LineOffsetTable::build(source)));
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn style(&self, code: &'static str) -> &'static str {
        if self.colors {
            code
        } else {
            ""
        }
    }

    fn locate(&self, span: Span) -> Option<Excerpt<'src>> {
        let (source, table) = self.source.as_ref()?;
        let source: &'src str = *source;
        let covered = span.snippet(source)?;
        let (line, column) = table.offset_to_line_col(source, span.start);
        // underline the first line of a span that crosses a line break
        let width = covered.lines().next().map_or(0, |first| first.chars().count());
        Some(Excerpt {
            line,
            column,
            text: table.line_text(source, line),
            carets: width.max(1),
        })
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let (red, blue, bold, reset) = (
            self.style(RED),
            self.style(BLUE),
            self.style(BOLD),
            self.style(RESET),
        );
        let label = if diagnostic.label.is_empty() {
            String::new()
        } else {
            format!(" {}", diagnostic.label)
        };

        writeln!(
            self.writer,
            "{red}error[{}]{reset}{bold}: {}{reset}",
            diagnostic.code, diagnostic.message
        )?;

        let pad = match self.locate(diagnostic.span) {
            Some(excerpt) => {
                let gutter = excerpt.line.to_string();
                let pad = " ".repeat(gutter.len());
                let indent = " ".repeat(excerpt.column.saturating_sub(1) as usize);
                let carets = "^".repeat(excerpt.carets);
                writeln!(
                    self.writer,
                    "{pad}{blue}-->{reset} {}:{}",
                    excerpt.line, excerpt.column
                )?;
                writeln!(self.writer, "{pad} {blue}|{reset}")?;
                writeln!(self.writer, "{blue}{gutter} |{reset} {}", excerpt.text)?;
                writeln!(
                    self.writer,
                    "{pad} {blue}|{reset} {indent}{red}{carets}{label}{reset}"
                )?;
                pad
            }
            None => {
                writeln!(self.writer, " {blue}-->{reset} {}{label}", diagnostic.span)?;
                " ".to_string()
            }
        };

        for note in &diagnostic.notes {
            writeln!(self.writer, "{pad} {blue}={reset} {bold}note{reset}: {note}")?;
        }
        writeln!(self.writer)
    }

    fn finish(&mut self, error_count: usize) -> io::Result<()> {
        if error_count > 0 {
            let (red, bold, reset) = (self.style(RED), self.style(BOLD), self.style(RESET));
            let plural = if error_count == 1 { "" } else { "s" };
            writeln!(
                self.writer,
                "{red}error{reset}{bold}: checking failed with {error_count} error{plural}{reset}"
            )?;
        }
        self.writer.flush()
    }
}
