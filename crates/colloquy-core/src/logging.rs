//! Tracing bootstrap for composition roots.

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` (typically the
/// configured `general.log_level`) is used. Calling this twice is an error
/// from the subscriber, so it belongs in `main`, not in library code.
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.to_string())),
        )
        .init();
}
