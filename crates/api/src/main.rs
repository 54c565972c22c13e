use std::sync::Arc;

use anyhow::Context;

use finapi_accounts::CustomerRegistry;
use finapi_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    finapi_observability::init();

    let config = ApiConfig::from_env()?;
    let app = finapi_api::app::build_app(Arc::new(CustomerRegistry::new()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server terminated with an error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
