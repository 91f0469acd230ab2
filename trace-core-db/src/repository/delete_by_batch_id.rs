use async_trait::async_trait;
use sqlx::Database;
use trace_core_api::TraceResult;

/// Repository trait for removing an entity by its public batch identifier.
///
/// # Returns
/// * `Ok(())` - The entity was removed
/// * `Err(TraceError::NotFound)` - If no entity carries this identifier
#[async_trait]
pub trait DeleteByBatchId<DB: Database>: Send + Sync {
    async fn delete_by_batch_id(&self, batch_id: &str) -> TraceResult<()>;
}
