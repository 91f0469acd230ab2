use trace_core_api::TraceResult;

use super::repo_impl::ScanLogRepositoryImpl;
use crate::utils::transaction_consumed;

impl ScanLogRepositoryImpl {
    pub(super) async fn count_by_batch_id_impl(
        repo: &ScanLogRepositoryImpl,
        batch_id: &str,
    ) -> TraceResult<i64> {
        let query = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM scan_log WHERE batch_id = $1")
            .bind(batch_id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
        Ok(query.fetch_one(&mut **transaction).await?)
    }
}
