use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use trace_core_api::TraceError;
use trace_core_db::models::batch::{BatchFilter, BatchPatch, BatchStatus, BatchView, NewBatch};
use trace_core_db::repository::{
    Create, DeleteByBatchId, FindByBatchId, List, PageRequest, UpdateByBatchId,
};
use trace_core_postgres::run_in_session;
use tracing::info;

use crate::auth::AdminActor;
use crate::http::error::{ApiError, ApiResult};
use crate::http::extract::{JsonBadRequest, QueryBadRequest};
use crate::http::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct ListBatchesQuery {
    pub batch_id: Option<String>,
    pub product_name: Option<String>,
    pub status: Option<String>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl ListBatchesQuery {
    fn filter(&self) -> Result<BatchFilter, ApiError> {
        let mut filter = BatchFilter::default();
        if let Some(fragment) = &self.batch_id {
            filter = filter.batch_id_contains(fragment.as_str());
        }
        if let Some(fragment) = &self.product_name {
            filter = filter.product_name_contains(fragment.as_str());
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            let status: BatchStatus = status.parse().map_err(ApiError::validation_error)?;
            filter = filter.with_status(status);
        }
        Ok(filter)
    }
}

pub async fn list_batches(
    State(state): State<SharedState>,
    _admin: AdminActor,
    QueryBadRequest(query): QueryBadRequest<ListBatchesQuery>,
) -> ApiResult<Json<Vec<BatchView>>> {
    let filter = query.filter()?;
    let page = PageRequest::from_query(query.skip, query.limit);

    let batches = run_in_session(&state.pool, |repos| async move {
        repos.batch_repository.list(&filter, page).await
    })
    .await?;

    Ok(Json(batches.iter().map(BatchView::from).collect()))
}

pub async fn get_batch(
    State(state): State<SharedState>,
    _admin: AdminActor,
    Path(batch_id): Path<String>,
) -> ApiResult<Json<BatchView>> {
    let batch = run_in_session(&state.pool, |repos| async move {
        repos
            .batch_repository
            .find_by_batch_id(&batch_id)
            .await?
            .ok_or_else(|| TraceError::batch_not_found(&batch_id))
    })
    .await?;

    Ok(Json(batch.to_view()))
}

pub async fn create_batch(
    State(state): State<SharedState>,
    AdminActor(admin): AdminActor,
    JsonBadRequest(new_batch): JsonBadRequest<NewBatch>,
) -> ApiResult<(StatusCode, Json<BatchView>)> {
    let model = new_batch.into_model(Utc::now())?;

    let created = run_in_session(&state.pool, |repos| async move {
        repos.batch_repository.create(model).await
    })
    .await?;

    info!(batch_id = %created.batch_id, admin = %admin.subject, "Batch created");
    Ok((StatusCode::CREATED, Json(created.to_view())))
}

pub async fn update_batch(
    State(state): State<SharedState>,
    AdminActor(admin): AdminActor,
    Path(batch_id): Path<String>,
    JsonBadRequest(patch): JsonBadRequest<BatchPatch>,
) -> ApiResult<Json<BatchView>> {
    let updated = run_in_session(&state.pool, |repos| async move {
        repos
            .batch_repository
            .update_by_batch_id(&batch_id, patch, Utc::now())
            .await
    })
    .await?;

    info!(batch_id = %updated.batch_id, admin = %admin.subject, "Batch updated");
    Ok(Json(updated.to_view()))
}

pub async fn delete_batch(
    State(state): State<SharedState>,
    AdminActor(admin): AdminActor,
    Path(batch_id): Path<String>,
) -> ApiResult<StatusCode> {
    let deleted = batch_id.clone();
    run_in_session(&state.pool, |repos| async move {
        repos.batch_repository.delete_by_batch_id(&batch_id).await
    })
    .await?;

    info!(batch_id = %deleted, admin = %admin.subject, "Batch deleted");
    Ok(StatusCode::NO_CONTENT)
}
