//! Tracing subscriber setup for hosts embedding wheel components.
//!
//! `RUST_LOG` always wins. Hosts that want picker events in their own logs
//! without setting the environment pass a default directive string:
//!
//! ```
//! wheel_ui::logging::init_tracing_with("warn,wheel_components=debug");
//! tracing::debug!(target: "wheel_components", "visible by default");
//! ```

use tracing_subscriber::EnvFilter;

/// Directives used by [`init_tracing`] when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "error,wheel_ui=info,wheel_components=info";

/// Installs a global `tracing` subscriber with [`DEFAULT_FILTER`].
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_FILTER);
}

/// Installs a global `tracing` subscriber, falling back to `default_filter`
/// when `RUST_LOG` is unset or invalid.
///
/// An unparsable `default_filter` degrades to `warn` with a warning once the
/// subscriber is up. Calling this more than once is a no-op.
pub fn init_tracing_with(default_filter: &str) {
    let (filter, rejected) = resolve_filter(default_filter);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed && let Some(directives) = rejected {
        tracing::warn!(%directives, "invalid default tracing filter, using `warn`");
    }
}

/// Picks the environment filter, else `default_filter`, else `warn`.
///
/// The second value holds `default_filter` when it had to be rejected.
fn resolve_filter(default_filter: &str) -> (EnvFilter, Option<String>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    match EnvFilter::try_new(default_filter) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new("warn"), Some(default_filter.to_owned())),
    }
}
