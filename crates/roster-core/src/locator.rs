use crate::employee::EmployeeId;
use std::fmt::Display;

/// Addressing mode used to find a single record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Locator {
    /// The system-generated internal id. Used for administrative cleanup.
    ByInternalId(EmployeeId),
    /// The client-chosen employee code. The primary way to address a record.
    ByEmployeeCode(String),
}

impl Locator {
    pub fn by_id(id: impl Into<EmployeeId>) -> Self {
        Self::ByInternalId(id.into())
    }

    pub fn by_code(code: impl Into<String>) -> Self {
        Self::ByEmployeeCode(code.into())
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::ByInternalId(id) => write!(f, "id '{}'", id),
            Locator::ByEmployeeCode(code) => write!(f, "employee code '{}'", code),
        }
    }
}
