use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Postgres;
use std::sync::Arc;
use trace_core_api::{TraceError, TraceResult};
use trace_core_db::models::batch::{BatchModel, BATCH_ID_MAX_LEN};
use trace_core_db::repository::{Create, FindByBatchId};
use trace_core_db::utils::required_heapless;
use tracing::{info, warn};

use crate::postgres_repositories::TraceRepositories;
use crate::repository::batch::BatchRepositoryImpl;

/// Identifier and creation time of a freshly cloned batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClonedBatch {
    pub batch_id: String,
    pub created_at: DateTime<Utc>,
}

/// Identifier used for a clone when the caller does not name one:
/// `<old>-<unix seconds>`.
///
/// Two clones of the same batch within one second derive the same id; the
/// second one then fails on the unique index.
pub fn derive_clone_batch_id(old_batch_id: &str, now: DateTime<Utc>) -> String {
    format!("{old_batch_id}-{}", now.timestamp())
}

/// Duplicates a batch's descriptive content under a new identifier.
pub struct CloneEngine<B> {
    batch_repository: Arc<B>,
}

impl CloneEngine<BatchRepositoryImpl> {
    pub fn from_repositories(repos: &TraceRepositories) -> Self {
        Self::new(repos.batch_repository.clone())
    }
}

impl<B> CloneEngine<B>
where
    B: FindByBatchId<Postgres, BatchModel> + Create<Postgres, BatchModel>,
{
    pub fn new(batch_repository: Arc<B>) -> Self {
        Self { batch_repository }
    }

    pub async fn clone_batch(
        &self,
        old_batch_id: &str,
        new_batch_id: Option<&str>,
    ) -> TraceResult<ClonedBatch> {
        self.clone_batch_at(old_batch_id, new_batch_id, Utc::now()).await
    }

    /// Clone `old_batch_id` using `now` for both the derived identifier and
    /// the new record's timestamps.
    ///
    /// An empty `new_batch_id` counts as absent. The source is never modified
    /// and the copy keeps no reference to it.
    pub async fn clone_batch_at(
        &self,
        old_batch_id: &str,
        new_batch_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> TraceResult<ClonedBatch> {
        let source = self
            .batch_repository
            .find_by_batch_id(old_batch_id)
            .await?
            .ok_or_else(|| {
                warn!(old_batch_id, "Clone of unknown batch");
                TraceError::batch_not_found(old_batch_id)
            })?;

        let target = match new_batch_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => derive_clone_batch_id(old_batch_id, now),
        };
        let target = required_heapless("new_batch_id", &target, BATCH_ID_MAX_LEN)?;

        let clone = self
            .batch_repository
            .create(source.duplicate_as(target, now))
            .await?;

        info!(old_batch_id, new_batch_id = %clone.batch_id, "Cloned batch");
        Ok(ClonedBatch {
            batch_id: clone.batch_id.to_string(),
            created_at: clone.created_at,
        })
    }
}
