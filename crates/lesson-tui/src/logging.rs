//! Structured logging configuration.
//!
//! Initializes a `tracing` subscriber with `RUST_LOG` environment filter
//! support, INFO default level, and stderr output so log lines never mix
//! with the terminal UI.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call this once at program startup. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shadow_tui=info,lesson_ui=info,lesson_core=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
