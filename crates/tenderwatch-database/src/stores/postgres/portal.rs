//! PostgreSQL portal store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tenderwatch_core::error::{AppError, ErrorKind};
use tenderwatch_core::result::AppResult;
use tenderwatch_entity::Portal;

use crate::stores::PortalStore;

/// Portal store backed by the `portals` table.
#[derive(Debug, Clone)]
pub struct PgPortalStore {
    pool: PgPool,
}

impl PgPortalStore {
    /// Create a new portal store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortalStore for PgPortalStore {
    async fn upsert_seed(&self, portal: &Portal) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO portals (id, name, url, portal_type, active, last_scanned, total_tenders, new_tenders, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET name = $2, url = $3, portal_type = $4, active = $5",
        )
        .bind(&portal.id)
        .bind(&portal.name)
        .bind(&portal.url)
        .bind(portal.portal_type)
        .bind(portal.active)
        .bind(portal.last_scanned)
        .bind(portal.total_tenders)
        .bind(portal.new_tenders)
        .bind(portal.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed portal", e))?;
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Portal>> {
        sqlx::query_as::<_, Portal>("SELECT * FROM portals ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list portals", e))
    }

    async fn list_active(&self) -> AppResult<Vec<Portal>> {
        sqlx::query_as::<_, Portal>("SELECT * FROM portals WHERE active = TRUE ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list active portals", e)
            })
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Portal>> {
        sqlx::query_as::<_, Portal>("SELECT * FROM portals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find portal", e))
    }

    async fn record_scan(
        &self,
        id: &str,
        scanned_at: DateTime<Utc>,
        new_tenders: i64,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE portals SET last_scanned = $2, new_tenders = $3, total_tenders = total_tenders + $3 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(scanned_at)
        .bind(new_tenders)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record scan", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Portal not found: {id}")));
        }
        Ok(())
    }
}
