//! Tracing subscriber setup.
//!
//! Opt-in: the engine itself only emits events; a host that wants them
//! calls `init_tracing` (or installs its own subscriber) once at startup.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `filter` overrides the `RUST_LOG`-style directive; when `None`, the
/// `GLOSA_LOG` env var is consulted, falling back to `warn`.
/// Returns false if a global subscriber was already set.
pub fn init_tracing(filter: Option<&str>) -> bool {
    let env_filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env("GLOSA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
