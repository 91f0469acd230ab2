use trace_core_api::TraceResult;
use trace_core_db::models::batch::{BatchFilter, BatchModel};
use trace_core_db::repository::PageRequest;
use tracing::debug;

use super::repo_impl::BatchRepositoryImpl;
use crate::utils::{transaction_consumed, TryFromRow};

impl BatchRepositoryImpl {
    pub(super) async fn list_impl(
        repo: &BatchRepositoryImpl,
        filter: &BatchFilter,
        page: PageRequest,
    ) -> TraceResult<Vec<BatchModel>> {
        let (limit, offset) = page.as_sql();
        debug!(?filter, limit, offset, "Listing batches");

        // Case-insensitive substring match. strpos instead of ILIKE so that
        // '%' and '_' in a filter match literally.
        let query = sqlx::query(
            r#"
            SELECT id, batch_id, product_name, origin_info, process_info, logistics_info, quality_report, scan_count, status, created_at, updated_at
            FROM batch
            WHERE ($1::text IS NULL OR strpos(lower(batch_id), lower($1)) > 0)
              AND ($2::text IS NULL OR strpos(lower(product_name), lower($2)) > 0)
              AND ($3::batch_status IS NULL OR status = $3)
            ORDER BY created_at DESC, id DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filter.batch_id_fragment())
        .bind(filter.product_name_fragment())
        .bind(filter.status)
        .bind(limit)
        .bind(offset);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            query.fetch_all(&mut **transaction).await?
        };

        rows.iter().map(BatchModel::try_from_row).collect()
    }
}
