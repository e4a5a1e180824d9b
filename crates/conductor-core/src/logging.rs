//! Structured logging setup with `tracing`.
//!
//! Diagnostics go through `tracing` to stderr; user-facing report output is
//! plain stdout and never routed through the logger.

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at binary startup. Subsequent calls are no-ops. `RUST_LOG`
/// overrides `level` when set.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init is a no-op if a subscriber is already set
    let _ = subscriber.try_init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init_subscriber("warn");
        init_subscriber("debug");
    }
}
