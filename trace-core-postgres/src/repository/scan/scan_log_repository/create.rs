use trace_core_api::TraceResult;
use trace_core_db::models::scan::ScanLogModel;

use super::repo_impl::ScanLogRepositoryImpl;
use crate::utils::transaction_consumed;

impl ScanLogRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ScanLogRepositoryImpl,
        item: ScanLogModel,
    ) -> TraceResult<ScanLogModel> {
        let query = sqlx::query(
            r#"
            INSERT INTO scan_log (id, batch_id, source_address, scanned_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id)
        .bind(item.batch_id.as_str())
        .bind(item.source_address.as_ref().map(|addr| addr.as_str()))
        .bind(item.scanned_at);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
        query.execute(&mut **transaction).await?;

        Ok(item)
    }
}
