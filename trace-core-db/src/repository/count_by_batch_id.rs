use async_trait::async_trait;
use sqlx::Database;
use trace_core_api::TraceResult;

/// Repository trait for counting entries that reference a batch identifier.
#[async_trait]
pub trait CountByBatchId<DB: Database>: Send + Sync {
    async fn count_by_batch_id(&self, batch_id: &str) -> TraceResult<i64>;
}
