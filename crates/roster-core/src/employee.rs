use jiff::Timestamp;
use std::fmt::Display;

/// Department labels accepted when the catalog policy is enforced.
pub const DEPARTMENT_CATALOG: [&str; 6] = ["APIM", "CS", "DAD", "DM", "AI", "Other"];

/// The system-generated identifier of a record.
///
/// Assigned once at creation and never reused, even after the record is deleted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A stored employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Internal id, never changed by clients.
    pub id: EmployeeId,
    /// Client-chosen external identifier. Immutable after creation.
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a record.
///
/// Fields arrive unvalidated; the record service trims and checks them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEmployee {
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
}

/// A partial update of a record.
///
/// Has no `employee_code` field: an update never changes the code of a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeePatch {
    /// Shallow-merges the supplied fields over `record`.
    ///
    /// `id`, `employee_code` and `created_at` are never touched.
    pub fn merge_into(self, record: &mut Employee) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(department) = self.department {
            record.department = department;
        }
        if let Some(salary) = self.salary {
            record.salary = salary;
        }
    }
}
