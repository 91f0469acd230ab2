use std::sync::Arc;

use crate::repository::batch::{BatchRepoFactory, BatchRepositoryImpl};
use crate::repository::scan::{ScanLogRepositoryImpl, ScanRepoFactory};
use crate::session::TraceSession;

/// Container for all repositories of one session
#[derive(Clone)]
pub struct TraceRepositories {
    pub batch_repository: Arc<BatchRepositoryImpl>,
    pub scan_log_repository: Arc<ScanLogRepositoryImpl>,
}

impl TraceRepositories {
    pub fn from_session(session: &TraceSession) -> Self {
        Self {
            batch_repository: BatchRepoFactory::new().build_batch_repo(session),
            scan_log_repository: ScanRepoFactory::new().build_scan_log_repo(session),
        }
    }
}
