use trace_core_api::TraceResult;
use trace_core_db::models::scan::ScanLogModel;
use trace_core_db::repository::{Page, PageRequest};
use tracing::debug;

use super::repo_impl::ScanLogRepositoryImpl;
use crate::utils::{transaction_consumed, TryFromRow};

impl ScanLogRepositoryImpl {
    pub(super) async fn find_page_by_batch_id_impl(
        repo: &ScanLogRepositoryImpl,
        batch_id: &str,
        page: PageRequest,
    ) -> TraceResult<Page<ScanLogModel>> {
        let (limit, offset) = page.as_sql();
        debug!(batch_id, limit, offset, "Loading scan history");

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM scan_log WHERE batch_id = $1")
            .bind(batch_id)
            .fetch_one(&mut **transaction)
            .await?;

        let rows = sqlx::query(
            r#"
            SELECT id, batch_id, source_address, scanned_at
            FROM scan_log
            WHERE batch_id = $1
            ORDER BY scanned_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(batch_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut **transaction)
        .await?;

        let items = rows
            .iter()
            .map(ScanLogModel::try_from_row)
            .collect::<TraceResult<Vec<_>>>()?;

        Ok(Page::new(
            items,
            usize::try_from(total).unwrap_or(0),
            page.limit,
            page.offset,
        ))
    }
}
