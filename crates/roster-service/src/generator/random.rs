use crate::generator::IdGenerator;
use roster_core::EmployeeId;
use uuid::Uuid;

/// Generates random version 4 UUIDs in their hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> EmployeeId {
        EmployeeId::new(Uuid::new_v4().to_string())
    }
}
