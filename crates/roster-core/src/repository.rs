use crate::employee::{Employee, EmployeeId};
use crate::error::StorageError;
use crate::locator::Locator;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A record together with its current position in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub index: usize,
    pub record: Employee,
}

/// The ordered collection of records.
///
/// A store holds no validation logic; uniqueness is the caller's job.
/// Each call is atomic on its own, but positions returned by the `find_*`
/// methods may be stale by the time they are passed back to
/// [`replace_at`](RecordStore::replace_at) or [`remove_at`](RecordStore::remove_at)
/// if other writers run in between.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Adds a record to the end of the sequence.
    async fn append(&self, record: Employee) -> Result<()>;

    /// Returns the first record whose employee code equals `code`.
    async fn find_by_code(&self, code: &str) -> Result<Option<Located>>;

    /// Returns the first record with the given internal id.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Located>>;

    /// Returns the first record holding `email`, using [`same_email`](crate::email::same_email).
    async fn find_by_email(&self, email: &str) -> Result<Option<Located>>;

    /// Overwrites the record at `index`.
    async fn replace_at(&self, index: usize, record: Employee) -> Result<()>;

    /// Removes and returns the record at `index`, keeping the order of the rest.
    async fn remove_at(&self, index: usize) -> Result<Employee>;

    /// Returns all records in insertion order.
    async fn all(&self) -> Result<Vec<Employee>>;

    /// Returns the number of records.
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Finds a record by either addressing mode.
    async fn locate(&self, locator: &Locator) -> Result<Option<Located>> {
        match locator {
            Locator::ByInternalId(id) => self.find_by_id(id).await,
            Locator::ByEmployeeCode(code) => self.find_by_code(code).await,
        }
    }
}
