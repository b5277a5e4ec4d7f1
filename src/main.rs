use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use grand_service::config::AppConfig;
use grand_service::routes;
use grand_service::state::AppState;
use grand_service::store::BookingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = BookingStore::open(&config.bookings_file, config.id_assignment)?;
    if !config.site_dir.exists() {
        tracing::warn!(dir = %config.site_dir.display(), "site directory not found, only the API will be served");
    }

    let state = Arc::new(AppState::new(store, config.clone()));
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Grand Service server running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
