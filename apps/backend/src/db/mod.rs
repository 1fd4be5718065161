//! SQLite database operations

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Items inserted into an empty table when seeding is enabled.
const SAMPLE_ITEMS: [(&str, &str, &str, &str, &str, &str); 2] = [
    (
        "挨拶 1",
        "日常的な挨拶の練習",
        "N5",
        "/static/audio/sample1.mp3",
        "おはようございます",
        "おはようございます",
    ),
    (
        "買い物 1",
        "買い物で使う表現",
        "N4",
        "/static/audio/sample2.mp3",
        "これください",
        "これ下さい",
    ),
];

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let mut options = SqlitePoolOptions::new().max_connections(max_connections.max(1));

        // Every connection to `:memory:` opens its own database, so keep exactly one alive.
        if database_url.contains(":memory:") {
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options.connect(database_url).await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Insert the sample items if the table is empty.
    ///
    /// Returns the number of items inserted.
    pub async fn seed_sample_items(&self) -> Result<usize> {
        let mut conn = self.pool.acquire().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM audio_items")
            .fetch_one(&mut *conn)
            .await?;
        if count > 0 {
            return Ok(0);
        }

        for (name, description, level, audio_url, kana, kanji) in SAMPLE_ITEMS {
            sqlx::query(
                r#"
                INSERT INTO audio_items
                    (name, description, level, audio_url, expected_kana, expected_kanji)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(name)
            .bind(description)
            .bind(level)
            .bind(audio_url)
            .bind(kana)
            .bind(kanji)
            .execute(&mut *conn)
            .await?;
        }

        Ok(SAMPLE_ITEMS.len())
    }

    // === Audio Item Repository ===

    /// Get all items ordered by id
    pub async fn list_items(&self) -> Result<Vec<AudioItem>> {
        let rows = sqlx::query_as::<_, DbAudioItem>(
            r#"
            SELECT id, name, description, level, audio_url, expected_kana, expected_kanji
            FROM audio_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(DbAudioItem::to_api_item).collect())
    }

    /// Get item by ID
    pub async fn get_item(&self, item_id: i64) -> Result<Option<AudioItem>> {
        let row = sqlx::query_as::<_, DbAudioItem>(
            r#"
            SELECT id, name, description, level, audio_url, expected_kana, expected_kanji
            FROM audio_items
            WHERE id = ?
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.to_api_item()))
    }

    /// Insert a new item (no id) or overwrite every field of an existing one.
    ///
    /// Returns `None` when `item_id` is given but no such item exists.
    pub async fn upsert_item(
        &self,
        input: &AudioItemInput,
        item_id: Option<i64>,
    ) -> Result<Option<AudioItem>> {
        let row = match item_id {
            None => {
                let row = sqlx::query_as::<_, DbAudioItem>(
                    r#"
                    INSERT INTO audio_items
                        (name, description, level, audio_url, expected_kana, expected_kanji)
                    VALUES (?, ?, ?, ?, ?, ?)
                    RETURNING id, name, description, level, audio_url, expected_kana, expected_kanji
                    "#,
                )
                .bind(&input.name)
                .bind(&input.description)
                .bind(&input.level)
                .bind(&input.audio_url)
                .bind(&input.expected_kana)
                .bind(&input.expected_kanji)
                .fetch_one(&self.pool)
                .await?;
                Some(row)
            }
            Some(id) => {
                sqlx::query_as::<_, DbAudioItem>(
                    r#"
                    UPDATE audio_items
                    SET name = ?, description = ?, level = ?, audio_url = ?,
                        expected_kana = ?, expected_kanji = ?
                    WHERE id = ?
                    RETURNING id, name, description, level, audio_url, expected_kana, expected_kanji
                    "#,
                )
                .bind(&input.name)
                .bind(&input.description)
                .bind(&input.level)
                .bind(&input.audio_url)
                .bind(&input.expected_kana)
                .bind(&input.expected_kanji)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(row.map(|r| r.to_api_item()))
    }

    /// Delete item by ID. Returns whether a row was removed.
    pub async fn delete_item(&self, item_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM audio_items WHERE id = ?")
            .bind(item_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
