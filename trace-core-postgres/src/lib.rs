pub mod postgres_repositories;
pub mod repository;
pub mod service;
pub mod session;
pub mod utils;

pub use postgres_repositories::TraceRepositories;
pub use repository::batch::BatchRepositoryImpl;
pub use repository::db_init::{cleanup_database, init_database};
pub use repository::scan::ScanLogRepositoryImpl;
pub use service::{derive_clone_batch_id, CloneEngine, ClonedBatch, ScanRecorder};
pub use session::{run_in_session, TraceSession};

#[cfg(test)]
pub mod test_helper;
