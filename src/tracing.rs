//! Tracing initialization.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize tracing for the binary. Safe to call multiple times.
///
/// Logs go to stderr so the report on stdout stays machine-readable.
/// `verbose` lowers the default level to DEBUG; `RUST_LOG` directives still apply.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    INIT.call_once(|| install(level, false));
}

/// Initialize tracing for tests, routing output through the test harness
/// capture. Safe to call from every test.
pub fn init_test() {
    INIT.call_once(|| install(Level::DEBUG, true));
}

fn install(level: Level, test_writer: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .compact();

    // Global for the process, so the subscriber outlives this call.
    let result = if test_writer {
        builder.with_test_writer().finish().try_init()
    } else {
        builder.with_writer(std::io::stderr).finish().try_init()
    };
    if let Err(e) = result {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_init_installs_a_global_subscriber_once() {
        init_test();
        init_test();
        init(true);
        check!(tracing::dispatcher::has_been_set());
        tracing::debug!("still logging after repeated init");
    }
}
