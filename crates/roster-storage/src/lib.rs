pub mod memory;

pub use memory::InMemoryStore;
pub use roster_core::repository::{Located, RecordStore};
pub use roster_core::StorageError;
