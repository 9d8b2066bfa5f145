//! Cmm checking driver.
//!
//! Checks many independent expression trees against one symbol scope,
//! optionally in parallel, then collects every recorded type error into
//! sorted diagnostics and renders them for a terminal.
//!
//! ```text
//! let results = check_units(&units, &scope, &config);
//! let report = collect_diagnostics(&results, &interner, source, &config.diagnostics);
//! let mut emitter = TerminalEmitter::new(io::stderr(), ColorMode::Auto, is_tty).with_source(source);
//! emit_report(&report, &mut emitter)?;
//! ```

mod batch;
mod config;
mod report;

pub use batch::{check_units, CheckUnit};
pub use config::CheckConfig;
pub use report::{collect_diagnostics, emit_report, Report};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=cmm_types=debug` or `RUST_LOG=cmm_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
