use std::sync::Arc;

use anyhow::Context;

use moodlog_api::{build_router, config::Config, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    // Lazy so the health check answers even while the store is down.
    let db = db::create_lazy_pool(&config.database).context("Invalid database settings")?;
    tracing::info!(
        database = %config.database.name,
        max_connections = config.database.max_connections,
        "Database pool configured"
    );

    let state = AppState {
        db,
        config: config.clone(),
    };
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Backend server running on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
