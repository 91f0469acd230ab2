use chrono::{DateTime, Utc};
use trace_core_api::TraceResult;
use trace_core_db::models::batch::BatchModel;
use tracing::debug;

use super::repo_impl::BatchRepositoryImpl;
use crate::utils::{transaction_consumed, TryFromRow};

impl BatchRepositoryImpl {
    pub(super) async fn increment_scan_count_impl(
        repo: &BatchRepositoryImpl,
        batch_id: &str,
        now: DateTime<Utc>,
    ) -> TraceResult<Option<BatchModel>> {
        // A single UPDATE takes the row lock and increments in place, so
        // concurrent lookups queue on the row instead of losing updates.
        let query = sqlx::query(
            r#"
            UPDATE batch SET
            scan_count = scan_count + 1,
            updated_at = $2
            WHERE batch_id = $1
            RETURNING id, batch_id, product_name, origin_info, process_info, logistics_info, quality_report, scan_count, status, created_at, updated_at
            "#,
        )
        .bind(batch_id)
        .bind(now);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            query.fetch_optional(&mut **transaction).await?
        };

        let batch = row.as_ref().map(BatchModel::try_from_row).transpose()?;
        if let Some(batch) = &batch {
            debug!(batch_id, scan_count = batch.scan_count, "Incremented scan count");
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::batch::batch_repository::test_utils::{create_test_batch, test_now};
    use crate::test_helper::{setup_test_context, unique_batch_id};
    use chrono::Duration;
    use serial_test::serial;
    use trace_core_db::repository::{Create, IncrementScanCount};

    #[tokio::test]
    #[serial]
    #[ignore = "requires running PostgreSQL"]
    async fn test_increment_scan_count() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let batch_repo = &ctx.repos().batch_repository;

        let batch = create_test_batch(&unique_batch_id("INC"), "Rice");
        batch_repo.create(batch.clone()).await?;

        let later = test_now() + Duration::seconds(3);
        batch_repo.increment_scan_count(&batch.batch_id, later).await?;
        let bumped = batch_repo
            .increment_scan_count(&batch.batch_id, later)
            .await?
            .ok_or("batch should exist")?;

        assert_eq!(bumped.scan_count, 2);
        assert_eq!(bumped.updated_at, later);
        assert_eq!(bumped.created_at, batch.created_at);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires running PostgreSQL"]
    async fn test_increment_unknown_batch_returns_none() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let batch_repo = &ctx.repos().batch_repository;

        let result = batch_repo
            .increment_scan_count(&unique_batch_id("NONE"), test_now())
            .await?;
        assert!(result.is_none());

        Ok(())
    }
}
