//! Core types and traits for the Roster employee-records service.
//!
//! This crate provides the domain types, the error taxonomy, and the two
//! seams shared by the other crates: [`RecordStore`] for storage backends
//! and [`EmployeeDirectory`] for the record service.

pub mod directory;
pub mod email;
pub mod employee;
pub mod error;
pub mod locator;
pub mod repository;

pub use directory::{Deleted, EmployeeDirectory};
pub use employee::{Employee, EmployeeId, EmployeePatch, NewEmployee, DEPARTMENT_CATALOG};
pub use error::{ErrorKind, Field, RosterError, StorageError};
pub use locator::Locator;
pub use repository::{Located, RecordStore};
