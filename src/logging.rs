//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::fmt::format::{Compact, DefaultFields, FmtSpan, Format};

static INIT: Once = Once::new();

/// Initialize tracing for the server. Safe to call multiple times.
///
/// Output goes to stderr: stdout carries the MCP protocol. `RUST_LOG` adds
/// directives on top of the `info` default.
pub fn init() {
    INIT.call_once(|| {
        if let Err(e) = subscriber(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e)
        }
    });
}

/// Initialize tracing for tests: debug level, captured by the test harness.
///
/// Installs a global subscriber so events from every test thread are captured.
pub fn init_for_tests() {
    INIT.call_once(|| {
        // Another subscriber already being installed is fine for tests.
        let _ = subscriber(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn subscriber(
    level: tracing::Level,
) -> SubscriberBuilder<DefaultFields, Format<Compact>, EnvFilter> {
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .compact()
}
