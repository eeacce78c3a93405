use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use super::ContentRepository;
use crate::content::ContentDocument;
use crate::document::key::DocumentKind;
use crate::error::StoreError;

/// Content stored in the `site_content` table, one row per document kind.
#[derive(Debug, Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn load(&self, kind: DocumentKind) -> Result<Option<Value>, StoreError> {
        let data = sqlx::query_scalar::<_, Value>("SELECT data FROM site_content WHERE doc_type = $1")
            .bind(kind.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(data)
    }

    async fn save(&self, kind: DocumentKind, content: &ContentDocument) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO site_content (doc_type, data, updated_at) \
             VALUES ($1, $2, now()) \
             ON CONFLICT (doc_type) DO UPDATE \
             SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at",
        )
        .bind(kind.as_str())
        .bind(Json(content))
        .execute(&self.pool)
        .await?;
        tracing::info!(doc_type = %kind, "content document replaced");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
