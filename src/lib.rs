pub mod api; // JSON surface consumed by the browser frontend
pub mod catalog; // Static disease registry
pub mod config;
pub mod engine; // Risk scoring
pub mod patient;
pub mod report; // Plain-text export + parser
pub mod theme;
pub mod validator;
pub mod wizard; // Pure step state machine

use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG`, falling back to the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
