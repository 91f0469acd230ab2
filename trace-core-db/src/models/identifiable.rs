use uuid::Uuid;

/// Trait for entities that carry an internal UUID identity
///
/// The internal identity is never used as an external lookup key; batches are
/// addressed by their public `batch_id`.
pub trait Identifiable {
    /// Returns the internal identifier of the entity
    fn get_id(&self) -> Uuid;
}
