//! Diagnostics for `navtree`.
//!
//! Events from the builder and the CLI go through `tracing`. The binary
//! installs a stderr subscriber so stdout carries only the rendered navbar.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How chatty the CLI is, as picked by `-q` and repeated `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings, e.g. duplicate links found by `check`.
    #[default]
    Normal,
    /// Per-entry resolution steps.
    Verbose,
    /// Everything, including path joins.
    Trace,
}

impl Verbosity {
    /// The most detailed level emitted at this verbosity.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// `RUST_LOG` if set and parseable, else `navtree=<level>`.
fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("navtree={}", verbosity.level())))
}

/// Install the global subscriber, writing to stderr.
///
/// Later calls are no-ops: the first subscriber installed wins.
///
/// ```no_run
/// use navtree::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::trace!("subscriber already installed");
    }
}

/// Warn-level logging routed through the test harness capture.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
