pub mod batch_repository;
pub mod factory;

pub use batch_repository::BatchRepositoryImpl;
pub use factory::BatchRepoFactory;
