use async_trait::async_trait;
use sqlx::Database;
use trace_core_api::TraceResult;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for paging through entries that reference a batch
/// identifier, newest first.
#[async_trait]
pub trait FindPageByBatchId<DB: Database, T: Identifiable>: Send + Sync {
    async fn find_page_by_batch_id(
        &self,
        batch_id: &str,
        page: PageRequest,
    ) -> TraceResult<Page<T>>;
}
