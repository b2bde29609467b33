use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use twin_health_relay::{
    config::Config,
    routes,
    services::provider::OpenRouterClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Fails before anything is bound when the credential is missing.
    let config = Config::from_env()?;
    info!(provider = ?config.provider, server = ?config.server, "loaded configuration");

    let provider = OpenRouterClient::new(&config.provider)?;
    let state = Arc::new(AppState::new(provider, config.relay.clone()));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.server)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server.port)).await?;

    info!("chat relay listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
