use sqlx::PgPool;
use std::sync::Arc;
use trace_core_api::AuthGate;

/// Shared state handed to every handler.
pub struct AppState {
    pub pool: PgPool,
    pub auth_gate: Arc<dyn AuthGate>,
}

impl AppState {
    pub fn new(pool: PgPool, auth_gate: Arc<dyn AuthGate>) -> Self {
        Self { pool, auth_gate }
    }
}

pub type SharedState = Arc<AppState>;
