//! Observability (logging and tracing)
//!
//! Rendering emits `tracing` events: `trace` per template render, `debug`
//! for htmx attributes that do not match the schema, and `error` when a
//! development-mode element call fails. [`init`] installs a subscriber for
//! applications that have none of their own.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging stack
///
/// Sets up:
/// - Structured logging with JSON formatting (production) or pretty formatting (dev)
/// - Environment-based log level filtering (`RUST_LOG`)
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```rust,no_run
/// use typed_htmx::observability;
///
/// observability::init();
/// tracing::info!("Application started");
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            EnvFilter::new("debug,typed_htmx=trace")
        } else {
            EnvFilter::new("info")
        }
    });

    #[cfg(debug_assertions)]
    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .try_init();

    #[cfg(not(debug_assertions))]
    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        init();
        init();
        tracing::trace!("still logging");
    }
}
