use chrono::{DateTime, Utc};
use trace_core_api::{TraceError, TraceResult};
use trace_core_db::models::batch::{BatchModel, BatchPatch};
use tracing::{info, warn};

use super::repo_impl::BatchRepositoryImpl;
use crate::utils::{transaction_consumed, TryFromRow};

impl BatchRepositoryImpl {
    pub(super) async fn update_by_batch_id_impl(
        repo: &BatchRepositoryImpl,
        batch_id: &str,
        patch: BatchPatch,
        now: DateTime<Utc>,
    ) -> TraceResult<BatchModel> {
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;

        // Hold the row lock until the session ends so the merge below works on
        // the latest committed state and concurrent scans wait for it.
        let row = sqlx::query(
            r#"
            SELECT id, batch_id, product_name, origin_info, process_info, logistics_info, quality_report, scan_count, status, created_at, updated_at
            FROM batch
            WHERE batch_id = $1
            FOR UPDATE
            "#,
        )
        .bind(batch_id)
        .fetch_optional(&mut **transaction)
        .await?;

        let Some(row) = row else {
            warn!(batch_id, "Update of unknown batch");
            return Err(TraceError::batch_not_found(batch_id));
        };
        let mut batch = BatchModel::try_from_row(&row)?;
        patch.apply_to(&mut batch, now)?;

        sqlx::query(
            r#"
            UPDATE batch SET
            product_name = $2,
            origin_info = $3,
            process_info = $4,
            logistics_info = $5,
            quality_report = $6,
            status = $7,
            updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(batch.id)
        .bind(batch.product_name.as_str())
        .bind(batch.origin_info.as_deref())
        .bind(batch.process_info.as_deref())
        .bind(batch.logistics_info.as_deref())
        .bind(batch.quality_report.as_deref())
        .bind(batch.status)
        .bind(batch.updated_at)
        .execute(&mut **transaction)
        .await?;

        info!(batch_id, status = %batch.status, "Updated batch");
        Ok(batch)
    }
}
