use trace_core_api::{TraceError, TraceResult};
use trace_core_db::models::batch::BatchModel;
use tracing::{info, warn};

use super::repo_impl::BatchRepositoryImpl;
use crate::utils::transaction_consumed;

impl BatchRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &BatchRepositoryImpl,
        item: BatchModel,
    ) -> TraceResult<BatchModel> {
        let query = sqlx::query(
            r#"
            INSERT INTO batch
            (id, batch_id, product_name, origin_info, process_info, logistics_info, quality_report, scan_count, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(item.id)
        .bind(item.batch_id.as_str())
        .bind(item.product_name.as_str())
        .bind(item.origin_info.as_deref())
        .bind(item.process_info.as_deref())
        .bind(item.logistics_info.as_deref())
        .bind(item.quality_report.as_deref())
        .bind(item.scan_count)
        .bind(item.status)
        .bind(item.created_at)
        .bind(item.updated_at);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;

        // The unique index on batch_id decides collisions atomically with the insert.
        match query.execute(&mut **transaction).await.map_err(TraceError::from) {
            Ok(_) => {}
            Err(TraceError::DuplicateIdentifier(_)) => {
                warn!(batch_id = %item.batch_id, "Rejected batch with existing batch_id");
                return Err(TraceError::batch_id_taken(&item.batch_id));
            }
            Err(e) => return Err(e),
        }

        info!(batch_id = %item.batch_id, id = %item.id, "Created batch");
        Ok(item)
    }
}
