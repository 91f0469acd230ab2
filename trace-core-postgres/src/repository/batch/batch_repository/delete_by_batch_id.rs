use trace_core_api::{TraceError, TraceResult};
use tracing::{info, warn};

use super::repo_impl::BatchRepositoryImpl;
use crate::utils::transaction_consumed;

impl BatchRepositoryImpl {
    pub(super) async fn delete_by_batch_id_impl(
        repo: &BatchRepositoryImpl,
        batch_id: &str,
    ) -> TraceResult<()> {
        // Scan log entries are kept: they are history, not part of the batch.
        let query = sqlx::query("DELETE FROM batch WHERE batch_id = $1").bind(batch_id);

        let result = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            query.execute(&mut **transaction).await?
        };

        if result.rows_affected() == 0 {
            warn!(batch_id, "Delete of unknown batch");
            return Err(TraceError::batch_not_found(batch_id));
        }

        info!(batch_id, "Deleted batch");
        Ok(())
    }
}
