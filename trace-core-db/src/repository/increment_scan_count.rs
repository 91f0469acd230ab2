use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Database;
use trace_core_api::TraceResult;

use crate::models::identifiable::Identifiable;

/// Repository trait for bumping a visit counter in place.
///
/// The increment must be a single atomic statement on the stored row so
/// that concurrent lookups never lose an update.
///
/// # Returns
/// * `Ok(Some(T))` - The entity after the increment
/// * `Ok(None)` - If no entity carries this identifier (nothing was changed)
/// * `Err` - An error if the statement could not be executed
#[async_trait]
pub trait IncrementScanCount<DB: Database, T: Identifiable>: Send + Sync {
    async fn increment_scan_count(
        &self,
        batch_id: &str,
        now: DateTime<Utc>,
    ) -> TraceResult<Option<T>>;
}
