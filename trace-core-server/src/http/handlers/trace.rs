use axum::extract::{ConnectInfo, Path, State};
use axum::Json;
use std::net::SocketAddr;
use trace_core_db::models::batch::BatchView;
use trace_core_postgres::{run_in_session, ScanRecorder};

use crate::http::error::ApiResult;
use crate::http::state::SharedState;

/// Public trace lookup. Every successful call counts as one scan.
pub async fn trace_batch(
    State(state): State<SharedState>,
    Path(batch_id): Path<String>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> ApiResult<Json<BatchView>> {
    let source_address = connect_info.map(|ConnectInfo(addr)| addr.ip().to_string());

    let view = run_in_session(&state.pool, |repos| async move {
        ScanRecorder::from_repositories(&repos)
            .record_scan(&batch_id, source_address.as_deref())
            .await
    })
    .await?;

    Ok(Json(view))
}
