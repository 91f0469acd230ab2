use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Database;
use trace_core_api::TraceResult;

use crate::models::identifiable::Identifiable;

/// Repository trait for merging a partial update into an existing entity.
///
/// Fails with `TraceError::NotFound` when the identifier does not resolve.
/// The row stays locked from read to write, so concurrent updates of the same
/// identifier serialize.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
/// * `P` - The patch type applied to `T`
#[async_trait]
pub trait UpdateByBatchId<DB: Database, T: Identifiable, P: Send + 'static>: Send + Sync {
    /// Apply `patch` to the entity identified by `batch_id`, stamping `now`
    async fn update_by_batch_id(
        &self,
        batch_id: &str,
        patch: P,
        now: DateTime<Utc>,
    ) -> TraceResult<T>;
}
