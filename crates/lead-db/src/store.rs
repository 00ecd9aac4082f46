use crate::DbErrorResult;

use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Schemaless JSON document storage over a single SQLite table.
///
/// Documents are grouped by collection name and stored as serialized JSON
/// text, keyed by a v4 UUID assigned on insert. Callers that need structure
/// deserialize the body themselves.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a document and return its generated id.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        document: &T,
    ) -> DbErrorResult<String> {
        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(document)?;
        let created_at = chrono::Utc::now().timestamp();

        // Use sqlx::query (not query!) to avoid offline mode issues
        sqlx::query("INSERT INTO documents (id, collection, body, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(collection)
            .bind(&body)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Fetch a single document by collection and id.
    pub async fn find_document(
        &self,
        collection: &str,
        id: &str,
    ) -> DbErrorResult<Option<serde_json::Value>> {
        let body: Option<String> =
            sqlx::query_scalar("SELECT body FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// Distinct collection names in sorted order, capped at `limit`.
    pub async fn list_collections(&self, limit: i64) -> DbErrorResult<Vec<String>> {
        let names =
            sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT ?")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        Ok(names)
    }

    pub async fn count_documents(&self, collection: &str) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = ?")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Round-trip probe used by the diagnostic endpoint.
    pub async fn health_check(&self) -> DbErrorResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}
