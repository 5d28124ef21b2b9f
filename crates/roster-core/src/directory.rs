use crate::employee::{Employee, EmployeePatch, NewEmployee};
use crate::error::Result;
use crate::locator::Locator;
use async_trait::async_trait;

/// Confirmation of a successful delete, carrying the removed record.
#[derive(Debug, Clone, PartialEq)]
pub struct Deleted {
    pub record: Employee,
}

/// The record service: validated create, list, update and delete.
///
/// Every operation either fully succeeds or fails without mutating anything.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync + 'static {
    /// Validates `input`, assigns a fresh id and appends the new record.
    async fn create(&self, input: NewEmployee) -> Result<Employee>;

    /// Returns every record in creation order.
    async fn list(&self) -> Result<Vec<Employee>>;

    /// Merges `patch` into the record with `employee_code`.
    /// The employee code itself is always preserved.
    async fn update(&self, employee_code: &str, patch: EmployeePatch) -> Result<Employee>;

    /// Removes the first record matching `locator`.
    async fn delete(&self, locator: &Locator) -> Result<Deleted>;
}
