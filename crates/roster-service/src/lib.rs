//! Employee record service implementation.
//!
//! This crate provides [`RecordService`], the id generators and the field
//! policy. Core types are re-exported from `roster_core`.

pub mod generator;
pub mod policy;
pub mod service;

pub use generator::random::UuidGenerator;
pub use generator::seq::SeqIdGenerator;
pub use generator::IdGenerator;
pub use policy::{DepartmentPolicy, DirectoryPolicy};
pub use roster_core::{EmployeeDirectory, RosterError};
pub use service::RecordService;
