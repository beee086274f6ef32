//! Tracing setup for the command-line binary.

use std::io::stderr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate-level directive used when `RUST_LOG` is unset or unparseable.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "golf_stats=debug"
    } else {
        "golf_stats=info"
    }
}

/// Filter from a `RUST_LOG` value, falling back to [`default_directive`].
///
/// A non-empty, valid `rust_log` is used as is, so it can both raise and
/// lower this crate's level.
pub fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install a stderr subscriber so stdout stays free for CSV/JSON output.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` picks debug over info.
/// Calling this twice is harmless: the second install is ignored.
pub fn setup_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), verbose);

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
