pub mod factory;
pub mod scan_log_repository;

pub use factory::ScanRepoFactory;
pub use scan_log_repository::ScanLogRepositoryImpl;
