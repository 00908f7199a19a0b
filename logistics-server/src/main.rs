use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use logistics_server::config::AppConfig;
use logistics_server::store;
use logistics_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("failed to read configuration")?;

    if !config.geoapify.is_configured() {
        warn!("GEOAPIFY_API_KEY not set; route lookups will fail");
    }

    let pool = store::connect(&config.database_url)
        .await
        .context("failed to open database")?;
    store::migrate(&pool)
        .await
        .context("failed to apply migrations")?;

    let state = AppState::from_config(pool, &config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
