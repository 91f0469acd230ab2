use async_trait::async_trait;
use sqlx::Database;
use trace_core_api::TraceResult;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::PageRequest;

/// Repository trait for filtered, ordered listing.
///
/// An empty result is not an error.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
/// * `F` - The filter type
#[async_trait]
pub trait List<DB: Database, T: Identifiable, F: Send + Sync>: Send + Sync {
    async fn list(&self, filter: &F, page: PageRequest) -> TraceResult<Vec<T>>;
}
