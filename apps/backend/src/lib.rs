pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    if config.seed_sample_items {
        let seeded = db.seed_sample_items().await?;
        if seeded > 0 {
            tracing::info!("Seeded {} sample audio items", seeded);
        }
    }

    let state = AppState { db: Arc::new(db) };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Answer check
        .route("/check", post(routes::check::check))
        // Audio item routes
        .route(
            "/api/audio-items",
            get(routes::items::list).post(routes::items::create),
        )
        .route(
            "/api/audio-items/:id",
            get(routes::items::get)
                .put(routes::items::update)
                .delete(routes::items::delete),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
