use crate::generator::IdGenerator;
use roster_core::EmployeeId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A sequential id generator.
///
/// Produces ids like "emp000000", "emp000001", etc. The counter only moves
/// forward, so ids are unique within a single instance and never reused.
/// Handy for tests and demos where readable, predictable ids help.
#[derive(Debug)]
pub struct SeqIdGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqIdGenerator {
    /// Creates a generator starting at zero with the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl IdGenerator for SeqIdGenerator {
    fn generate(&self) -> EmployeeId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        EmployeeId::new(format!("{}{:06}", self.prefix, count))
    }
}
