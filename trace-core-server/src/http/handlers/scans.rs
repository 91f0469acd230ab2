use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use trace_core_api::TraceError;
use trace_core_db::models::scan::ScanLogModel;
use trace_core_db::repository::{FindByBatchId, FindPageByBatchId, Page, PageRequest};
use trace_core_postgres::run_in_session;

use crate::auth::AdminActor;
use crate::http::error::ApiResult;
use crate::http::extract::QueryBadRequest;
use crate::http::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct ScanPageQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// Scan history of one batch, newest first.
pub async fn list_scans(
    State(state): State<SharedState>,
    _admin: AdminActor,
    Path(batch_id): Path<String>,
    QueryBadRequest(query): QueryBadRequest<ScanPageQuery>,
) -> ApiResult<Json<Page<ScanLogModel>>> {
    let page = PageRequest::from_query(query.skip, query.limit);

    let scans = run_in_session(&state.pool, |repos| async move {
        // Log entries outlive their batch; only live batches are auditable here.
        if repos
            .batch_repository
            .find_by_batch_id(&batch_id)
            .await?
            .is_none()
        {
            return Err(TraceError::batch_not_found(&batch_id));
        }
        repos
            .scan_log_repository
            .find_page_by_batch_id(&batch_id, page)
            .await
    })
    .await?;

    Ok(Json(scans))
}
