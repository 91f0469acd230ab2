use trace_core_api::TraceResult;
use trace_core_db::models::batch::BatchModel;
use tracing::debug;

use super::repo_impl::BatchRepositoryImpl;
use crate::utils::{transaction_consumed, TryFromRow};

impl BatchRepositoryImpl {
    pub(super) async fn find_by_batch_id_impl(
        repo: &BatchRepositoryImpl,
        batch_id: &str,
    ) -> TraceResult<Option<BatchModel>> {
        debug!(batch_id, "Looking up batch");
        let query = sqlx::query(
            r#"
            SELECT id, batch_id, product_name, origin_info, process_info, logistics_info, quality_report, scan_count, status, created_at, updated_at
            FROM batch
            WHERE batch_id = $1
            "#,
        )
        .bind(batch_id);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            query.fetch_optional(&mut **transaction).await?
        };

        row.as_ref().map(BatchModel::try_from_row).transpose()
    }
}
