use std::sync::Arc;

use super::BatchRepositoryImpl;
use crate::session::TraceSession;

/// Factory for creating batch repositories
///
/// The batch module keeps no caches, so the factory is stateless; it exists
/// so that callers build every repository the same way, from a session.
#[derive(Default)]
pub struct BatchRepoFactory {}

impl BatchRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build a BatchRepository bound to the session's transaction
    pub fn build_batch_repo(&self, session: &TraceSession) -> Arc<BatchRepositoryImpl> {
        Arc::new(BatchRepositoryImpl::new(session.executor().clone()))
    }
}
