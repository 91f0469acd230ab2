use async_trait::async_trait;
use sqlx::Database;
use trace_core_api::TraceResult;

use crate::models::identifiable::Identifiable;

/// Repository trait for resolving an entity by its public batch identifier.
///
/// # Returns
/// * `Ok(Some(T))` - The found entity
/// * `Ok(None)` - If no entity carries this identifier
/// * `Err` - An error if the query could not be executed
#[async_trait]
pub trait FindByBatchId<DB: Database, T: Identifiable>: Send + Sync {
    async fn find_by_batch_id(&self, batch_id: &str) -> TraceResult<Option<T>>;
}
