//! Tracing setup for the signup binary
//!
//! The app and the trellis framework both emit through `tracing`; this
//! module installs the one subscriber that collects it all.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber
///
/// Filtering defaults to debug for the app and framework targets in debug
/// builds and info in release builds; `RUST_LOG` overrides both. Output is
/// a compact console format with file and line information.
pub fn init() {
    let default_level = if cfg!(debug_assertions) {
        "signup=debug,trellis=debug,info"
    } else {
        "signup=info,trellis=info,warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Subscriber setup for tests: captured writer, debug level, and safe to
/// call from multiple tests because it uses `try_init`
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_does_not_panic() {
        init_test();
    }
}
