use async_trait::async_trait;
use chrono::{DateTime, Utc};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Postgres, Row};
use trace_core_api::TraceResult;
use trace_core_db::models::batch::{BatchFilter, BatchModel, BatchPatch};
use trace_core_db::repository::{
    Create, DeleteByBatchId, FindByBatchId, IncrementScanCount, List, PageRequest,
    UpdateByBatchId,
};

use crate::utils::{get_heapless_string, TryFromRow};

pub struct BatchRepositoryImpl {
    pub executor: Executor,
}

impl BatchRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for BatchModel {
    fn try_from_row(row: &PgRow) -> TraceResult<Self> {
        Ok(BatchModel {
            id: row.try_get("id")?,
            batch_id: get_heapless_string(row, "batch_id")?,
            product_name: get_heapless_string(row, "product_name")?,
            origin_info: row.try_get("origin_info")?,
            process_info: row.try_get("process_info")?,
            logistics_info: row.try_get("logistics_info")?,
            quality_report: row.try_get("quality_report")?,
            scan_count: row.try_get("scan_count")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl Create<Postgres, BatchModel> for BatchRepositoryImpl {
    async fn create(&self, item: BatchModel) -> TraceResult<BatchModel> {
        Self::create_impl(self, item).await
    }
}

#[async_trait]
impl FindByBatchId<Postgres, BatchModel> for BatchRepositoryImpl {
    async fn find_by_batch_id(&self, batch_id: &str) -> TraceResult<Option<BatchModel>> {
        Self::find_by_batch_id_impl(self, batch_id).await
    }
}

#[async_trait]
impl List<Postgres, BatchModel, BatchFilter> for BatchRepositoryImpl {
    async fn list(&self, filter: &BatchFilter, page: PageRequest) -> TraceResult<Vec<BatchModel>> {
        Self::list_impl(self, filter, page).await
    }
}

#[async_trait]
impl UpdateByBatchId<Postgres, BatchModel, BatchPatch> for BatchRepositoryImpl {
    async fn update_by_batch_id(
        &self,
        batch_id: &str,
        patch: BatchPatch,
        now: DateTime<Utc>,
    ) -> TraceResult<BatchModel> {
        Self::update_by_batch_id_impl(self, batch_id, patch, now).await
    }
}

#[async_trait]
impl DeleteByBatchId<Postgres> for BatchRepositoryImpl {
    async fn delete_by_batch_id(&self, batch_id: &str) -> TraceResult<()> {
        Self::delete_by_batch_id_impl(self, batch_id).await
    }
}

#[async_trait]
impl IncrementScanCount<Postgres, BatchModel> for BatchRepositoryImpl {
    async fn increment_scan_count(
        &self,
        batch_id: &str,
        now: DateTime<Utc>,
    ) -> TraceResult<Option<BatchModel>> {
        Self::increment_scan_count_impl(self, batch_id, now).await
    }
}
