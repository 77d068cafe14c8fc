// 📝 Tracing setup for the command line binary

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV: &str = "BMAD_LOG";
pub const DEFAULT_FILTER: &str = "bmad_patterns=info";

/// Install the global subscriber.
///
/// Reads `BMAD_LOG` (e.g. `BMAD_LOG=bmad_patterns=debug`), falling back to
/// `bmad_patterns=info`, or to `fallback` when one is given. Output goes to
/// stderr so stdout carries only JSON. Safe to call more than once.
pub fn init_tracing(fallback: Option<&str>) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
