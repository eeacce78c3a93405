mod auth;
mod config;
mod error;
mod middleware;
mod routes;
mod state;

use std::sync::Arc;

use site_content_core::repository::{MemoryContentRepository, PgContentRepository};
use site_content_core::theme::StyleVariables;
use site_content_core::{
    ContentCache, ContentRepository, ContentService, EventBus, MemorySignalStore, ThemeApplier,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    let config = config::AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting site content API server");

    let repository = connect_repository(&config).await?;

    let event_bus = EventBus::new(config.event_bus_capacity.get());
    let applier = ThemeApplier::new(StyleVariables::new(), event_bus);
    let cache = ContentCache::with_ttl(repository.clone(), config.content_cache_ttl);
    let service = ContentService::new(
        repository,
        cache,
        applier,
        Arc::new(MemorySignalStore::default()),
    );

    // Seed the style variables from whatever is stored.
    let theme = service.get_theme().await;
    service.applier().apply_variables(&theme);

    let state = state::AppState::new(service, config.clone());

    let app = routes::build_router(state)
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise an in-memory store.
async fn connect_repository(
    config: &config::AppConfig,
) -> anyhow::Result<Arc<dyn ContentRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, content will not survive a restart");
        return Ok(Arc::new(MemoryContentRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {e}"))?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;

    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgContentRepository::new(pool)))
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
