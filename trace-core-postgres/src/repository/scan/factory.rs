use std::sync::Arc;

use super::ScanLogRepositoryImpl;
use crate::session::TraceSession;

/// Factory for creating scan log repositories
#[derive(Default)]
pub struct ScanRepoFactory {}

impl ScanRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build a ScanLogRepository bound to the session's transaction
    pub fn build_scan_log_repo(&self, session: &TraceSession) -> Arc<ScanLogRepositoryImpl> {
        Arc::new(ScanLogRepositoryImpl::new(session.executor().clone()))
    }
}
