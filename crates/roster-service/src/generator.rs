pub mod random;
pub mod seq;

use roster_core::EmployeeId;

/// Trait for generating internal record ids.
///
/// Implementations are pure generators that don't interact with storage.
/// They must never hand out the same id twice during the life of the process,
/// so an id is never reused after its record is deleted.
pub trait IdGenerator: Send + Sync + 'static {
    /// Generates a new unique id.
    fn generate(&self) -> EmployeeId;
}
