//! Common test utilities and fixtures for integration tests.
//!
//! Every context runs against its own in-memory SQLite database, so tests are
//! isolated and need no external services.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use kana_drill_backend::db::Database;
use kana_drill_backend::models::{AudioItem, AudioItemInput};
use kana_drill_backend::AppState;

/// Test context containing database connection and router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty, migrated database.
    pub async fn new() -> Self {
        let db = Database::connect("sqlite::memory:", 1)
            .await
            .expect("Failed to open in-memory database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = kana_drill_backend::router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Create a context with the sample items already seeded.
    pub async fn with_sample_items() -> Self {
        let ctx = Self::new().await;
        ctx.db
            .seed_sample_items()
            .await
            .expect("Failed to seed sample items");
        ctx
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Insert an item directly through the store.
    pub async fn create_item(&self, input: &AudioItemInput) -> AudioItem {
        self.db
            .upsert_item(input, None)
            .await
            .expect("Failed to insert item")
            .expect("Insert returned no item")
    }
}
