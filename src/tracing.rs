//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::fmt::format::{Compact, DefaultFields, FmtSpan, Format};

static INIT: Once = Once::new();

/// Initialize tracing at INFO, written to stderr. Safe to call multiple times.
///
/// Logs go to stderr; stdout carries the MCP protocol.
pub fn init() {
    INIT.call_once(|| {
        if let Err(e) = builder(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

/// Initialize tracing at DEBUG through the test harness's captured output.
///
/// For tests; whichever of `init`/`init_test` runs first in a process wins.
pub fn init_test() {
    INIT.call_once(|| {
        let _ = builder(tracing::Level::DEBUG).with_test_writer().try_init();
    });
}

fn builder(level: tracing::Level) -> SubscriberBuilder<DefaultFields, Format<Compact>, EnvFilter> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .compact()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_init_test_enables_debug_and_is_idempotent() {
        init_test();
        init_test();
        init();
        check!(tracing::enabled!(tracing::Level::DEBUG));
    }
}
