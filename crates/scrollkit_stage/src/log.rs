//! Tracing subscriber setup for the `scrollkit` binary.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when `RUST_LOG` is unset.
pub const C_LOG_FILTER_DEFAULT: &str = "info";

/// Install a stderr fmt subscriber. Respects `RUST_LOG`; colors only on a tty.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(C_LOG_FILTER_DEFAULT));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
