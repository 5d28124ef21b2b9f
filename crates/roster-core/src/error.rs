use crate::locator::Locator;
use std::fmt::Display;
use thiserror::Error;

/// Result type for record service operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// A required input field of a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EmployeeCode,
    Email,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::EmployeeCode => f.write_str("Employee ID"),
            Field::Email => f.write_str("Email"),
        }
    }
}

/// Coarse classification of a [`RosterError`], used by transports to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is missing a field or breaks a field rule.
    Validation,
    /// The input collides with a uniqueness invariant.
    Conflict,
    /// No record matches the given key.
    NotFound,
    /// The store failed; not caused by the caller.
    Internal,
}

/// Errors returned by the record service.
///
/// The display strings are user facing and kept stable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail(String),
    #[error("Salary cannot be negative")]
    InvalidSalary(f64),
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),
    #[error("Employee ID already exists")]
    DuplicateEmployeeCode(String),
    #[error("Email already exists")]
    DuplicateEmail(String),
    #[error("Employee not found")]
    NotFound(Locator),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::MissingField(_)
            | RosterError::InvalidEmail(_)
            | RosterError::InvalidSalary(_)
            | RosterError::UnknownDepartment(_) => ErrorKind::Validation,
            RosterError::DuplicateEmployeeCode(_) | RosterError::DuplicateEmail(_) => {
                ErrorKind::Conflict
            }
            RosterError::NotFound(_) => ErrorKind::NotFound,
            RosterError::Storage(_) => ErrorKind::Internal,
        }
    }
}

/// Errors raised by [`RecordStore`](crate::RecordStore) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("index {index} is out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
}
