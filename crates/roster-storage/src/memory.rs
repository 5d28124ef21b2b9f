use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::email::same_email;
use roster_core::repository::{Located, RecordStore, Result};
use roster_core::{Employee, EmployeeId, StorageError};

/// In-memory implementation of [`RecordStore`] backed by an ordered `Vec`.
///
/// Iteration order is insertion order. Lookups are linear scans, which is
/// fine for the record counts this service is meant for.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<Employee>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    fn find_first<P>(&self, predicate: P) -> Option<Located>
    where
        P: Fn(&Employee) -> bool,
    {
        let records = self.records.read();
        records
            .iter()
            .position(predicate)
            .map(|index| Located {
                index,
                record: records[index].clone(),
            })
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn append(&self, record: Employee) -> Result<()> {
        self.records.write().push(record);
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Located>> {
        Ok(self.find_first(|e| e.employee_code == code))
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Located>> {
        Ok(self.find_first(|e| &e.id == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Located>> {
        Ok(self.find_first(|e| same_email(&e.email, email)))
    }

    async fn replace_at(&self, index: usize, record: Employee) -> Result<()> {
        let mut records = self.records.write();
        let len = records.len();
        let slot = records
            .get_mut(index)
            .ok_or(StorageError::IndexOutOfRange { index, len })?;
        *slot = record;
        Ok(())
    }

    async fn remove_at(&self, index: usize) -> Result<Employee> {
        let mut records = self.records.write();
        if index >= records.len() {
            return Err(StorageError::IndexOutOfRange {
                index,
                len: records.len(),
            });
        }
        Ok(records.remove(index))
    }

    async fn all(&self) -> Result<Vec<Employee>> {
        Ok(self.records.read().clone())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }
}
