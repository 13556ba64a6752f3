//! HTTP surface — the JSON API consumed by the browser frontend.
//!
//! Endpoint handlers use `State<ApiContext>`; middleware reads the same
//! context from request extensions (injected as the outermost layer).

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use server::ServerHandle;
pub use types::ApiContext;
