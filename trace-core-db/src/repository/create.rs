use async_trait::async_trait;
use sqlx::Database;
use trace_core_api::TraceResult;

use crate::models::identifiable::Identifiable;

/// Repository trait for persisting a single new entity.
///
/// Uniqueness of public identifiers is enforced by the store itself, so an
/// implementation must surface a constraint violation as
/// `TraceError::DuplicateIdentifier` rather than checking beforehand.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Postgres, BatchModel> for BatchRepositoryImpl {
///     async fn create(&self, item: BatchModel) -> TraceResult<BatchModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert `item` and return it as stored
    async fn create(&self, item: T) -> TraceResult<T>;
}
