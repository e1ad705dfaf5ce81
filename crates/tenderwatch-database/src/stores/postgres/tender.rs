//! PostgreSQL tender store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use tenderwatch_core::error::{AppError, ErrorKind};
use tenderwatch_core::result::AppResult;
use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
use tenderwatch_entity::Tender;

use crate::stores::{TenderFilter, TenderStore};

/// Tender store backed by the `tenders` table.
///
/// Deduplication relies on the `UNIQUE (portal_id, external_id)` constraint
/// so concurrent inserts of the same tender cannot both succeed.
#[derive(Debug, Clone)]
pub struct PgTenderStore {
    pool: PgPool,
}

impl PgTenderStore {
    /// Create a new tender store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenderStore for PgTenderStore {
    async fn insert_if_absent(&self, tender: &Tender) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO tenders (id, portal_id, external_id, title, organization, description, \
             value, publish_date, submission_deadline, location, category, keywords, \
             source_name, source_url, status, priority, discovered_at, added_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18) \
             ON CONFLICT (portal_id, external_id) DO NOTHING",
        )
        .bind(tender.id)
        .bind(&tender.portal_id)
        .bind(&tender.external_id)
        .bind(&tender.title)
        .bind(&tender.organization)
        .bind(&tender.description)
        .bind(tender.value)
        .bind(tender.publish_date)
        .bind(tender.submission_deadline)
        .bind(&tender.location)
        .bind(&tender.category)
        .bind(&tender.keywords)
        .bind(&tender.source_name)
        .bind(&tender.source_url)
        .bind(tender.status)
        .bind(tender.priority)
        .bind(tender.discovered_at)
        .bind(tender.added_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert tender", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tender>> {
        sqlx::query_as::<_, Tender>("SELECT * FROM tenders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tender", e))
    }

    async fn list(
        &self,
        filter: &TenderFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Tender>> {
        let where_clause = "($1::text IS NULL OR portal_id = $1) \
             AND ($2::tender_status IS NULL OR status = $2) \
             AND ($3::tender_priority IS NULL OR priority = $3) \
             AND ($4::text IS NULL OR category ILIKE $4) \
             AND ($5::text IS NULL OR title ILIKE '%' || $5 || '%' OR description ILIKE '%' || $5 || '%')";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM tenders WHERE {where_clause}"))
                .bind(&filter.portal_id)
                .bind(filter.status)
                .bind(filter.priority)
                .bind(&filter.category)
                .bind(&filter.search)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count tenders", e)
                })?;

        let tenders = sqlx::query_as::<_, Tender>(&format!(
            "SELECT * FROM tenders WHERE {where_clause} \
             ORDER BY discovered_at DESC, id LIMIT $6 OFFSET $7"
        ))
        .bind(&filter.portal_id)
        .bind(filter.status)
        .bind(filter.priority)
        .bind(&filter.category)
        .bind(&filter.search)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tenders", e))?;

        Ok(PageResponse::new(
            tenders,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tenders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tenders", e))
    }
}
