use std::net::SocketAddr;
use std::sync::Arc;

use healthguard::api::server::start_server;
use healthguard::api::types::ApiContext;
use healthguard::catalog::DiseaseCatalog;
use healthguard::config;
use healthguard::theme::ThemeStore;

#[tokio::main]
async fn main() {
    healthguard::init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let theme = ThemeStore::at_default_location().load();
    tracing::debug!(%theme, "Theme preference loaded");

    let catalog = Arc::new(DiseaseCatalog::builtin());
    tracing::info!(diseases = catalog.list().len(), "Disease catalog ready");

    let ctx = ApiContext::new(catalog);
    let addr = SocketAddr::from(([0, 0, 0, 0], config::server_port()));

    let mut server = match start_server(ctx, addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start HTTP server: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Frontend: http://localhost:{}", server.session.port);
    tracing::info!("API: http://localhost:{}/api", server.session.port);

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
}
