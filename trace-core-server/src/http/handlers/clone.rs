use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use trace_core_postgres::{run_in_session, CloneEngine, ClonedBatch};
use tracing::info;

use crate::auth::AdminActor;
use crate::http::error::ApiResult;
use crate::http::extract::JsonBadRequest;
use crate::http::state::SharedState;

#[derive(Debug, Clone, Deserialize)]
pub struct CloneRequest {
    #[serde(alias = "oldBatchId")]
    pub old_batch_id: String,
    /// Derived from the source id and the current time when absent or empty
    #[serde(default, alias = "newBatchId")]
    pub new_batch_id: Option<String>,
}

pub async fn clone_batch(
    State(state): State<SharedState>,
    AdminActor(admin): AdminActor,
    JsonBadRequest(request): JsonBadRequest<CloneRequest>,
) -> ApiResult<Json<ClonedBatch>> {
    let source = request.old_batch_id.clone();
    let cloned = run_in_session(&state.pool, |repos| async move {
        CloneEngine::from_repositories(&repos)
            .clone_batch(&request.old_batch_id, request.new_batch_id.as_deref())
            .await
    })
    .await?;

    info!(
        old_batch_id = %source,
        new_batch_id = %cloned.batch_id,
        admin = %admin.subject,
        "Clone requested"
    );
    Ok(Json(cloned))
}
