use chrono::{DateTime, Utc};
use sqlx::Postgres;
use std::sync::Arc;
use trace_core_api::{TraceError, TraceResult};
use trace_core_db::models::batch::{BatchModel, BatchView};
use trace_core_db::models::scan::ScanLogModel;
use trace_core_db::repository::{Create, IncrementScanCount};
use tracing::{info, warn};

use crate::postgres_repositories::TraceRepositories;
use crate::repository::batch::BatchRepositoryImpl;
use crate::repository::scan::ScanLogRepositoryImpl;

/// Records public trace lookups.
///
/// Both writes go through repositories of the same session, so the counter
/// bump and the log entry commit or roll back together with it.
pub struct ScanRecorder<B, S> {
    batch_repository: Arc<B>,
    scan_log_repository: Arc<S>,
}

impl ScanRecorder<BatchRepositoryImpl, ScanLogRepositoryImpl> {
    pub fn from_repositories(repos: &TraceRepositories) -> Self {
        Self::new(
            repos.batch_repository.clone(),
            repos.scan_log_repository.clone(),
        )
    }
}

impl<B, S> ScanRecorder<B, S>
where
    B: IncrementScanCount<Postgres, BatchModel>,
    S: Create<Postgres, ScanLogModel>,
{
    pub fn new(batch_repository: Arc<B>, scan_log_repository: Arc<S>) -> Self {
        Self {
            batch_repository,
            scan_log_repository,
        }
    }

    pub async fn record_scan(
        &self,
        batch_id: &str,
        source_address: Option<&str>,
    ) -> TraceResult<BatchView> {
        self.record_scan_at(batch_id, source_address, Utc::now()).await
    }

    /// Increment the batch's counter and append a log entry stamped `now`.
    ///
    /// Fails with `NotFound` before anything is written when the batch does
    /// not exist.
    pub async fn record_scan_at(
        &self,
        batch_id: &str,
        source_address: Option<&str>,
        now: DateTime<Utc>,
    ) -> TraceResult<BatchView> {
        let batch = self
            .batch_repository
            .increment_scan_count(batch_id, now)
            .await?
            .ok_or_else(|| {
                warn!(batch_id, "Trace lookup for unknown batch");
                TraceError::batch_not_found(batch_id)
            })?;

        let entry = ScanLogModel::new(batch.batch_id.clone(), source_address, now);
        self.scan_log_repository.create(entry).await?;

        info!(batch_id, scan_count = batch.scan_count, "Recorded scan");
        Ok(batch.to_view())
    }
}
