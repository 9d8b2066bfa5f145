//! Driver configuration.

use cmm_diagnostic::DiagnosticConfig;

/// Configuration for checking a batch of expression trees.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckConfig {
    /// How recorded errors are filtered and limited when reported.
    pub diagnostics: DiagnosticConfig,
    /// Check independent trees on a thread pool.
    pub parallel: bool,
    /// Stack size for pool worker threads, in bytes.
    pub stack_size: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            diagnostics: DiagnosticConfig::default(),
            parallel: true,
            // 32 MiB: unoptimized frames plus tracing spans on deep trees
            stack_size: 32 * 1024 * 1024,
        }
    }
}

impl CheckConfig {
    /// Sequential checking with every diagnostic kept.
    pub fn sequential() -> Self {
        CheckConfig {
            diagnostics: DiagnosticConfig::unlimited(),
            parallel: false,
            ..CheckConfig::default()
        }
    }
}
