use async_trait::async_trait;
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Postgres, Row};
use trace_core_api::TraceResult;
use trace_core_db::models::scan::ScanLogModel;
use trace_core_db::repository::{CountByBatchId, Create, FindPageByBatchId, Page, PageRequest};

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct ScanLogRepositoryImpl {
    pub executor: Executor,
}

impl ScanLogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ScanLogModel {
    fn try_from_row(row: &PgRow) -> TraceResult<Self> {
        Ok(ScanLogModel {
            id: row.try_get("id")?,
            batch_id: get_heapless_string(row, "batch_id")?,
            source_address: get_optional_heapless_string(row, "source_address")?,
            scanned_at: row.try_get("scanned_at")?,
        })
    }
}

#[async_trait]
impl Create<Postgres, ScanLogModel> for ScanLogRepositoryImpl {
    async fn create(&self, item: ScanLogModel) -> TraceResult<ScanLogModel> {
        Self::create_impl(self, item).await
    }
}

#[async_trait]
impl FindPageByBatchId<Postgres, ScanLogModel> for ScanLogRepositoryImpl {
    async fn find_page_by_batch_id(
        &self,
        batch_id: &str,
        page: PageRequest,
    ) -> TraceResult<Page<ScanLogModel>> {
        Self::find_page_by_batch_id_impl(self, batch_id, page).await
    }
}

#[async_trait]
impl CountByBatchId<Postgres> for ScanLogRepositoryImpl {
    async fn count_by_batch_id(&self, batch_id: &str) -> TraceResult<i64> {
        Self::count_by_batch_id_impl(self, batch_id).await
    }
}
