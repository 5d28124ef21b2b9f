use jiff::Timestamp;
use roster_core::{Employee, EmployeePatch, NewEmployee};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/employees`.
///
/// Missing fields default to empty values so the record service, not the
/// JSON decoder, reports which required field is absent. `empId` and `emp_id`
/// are accepted for the employee code as well. A missing or null salary is 0.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[serde(default, alias = "empId", alias = "emp_id")]
    pub employee_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub salary: Option<f64>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(value: CreateEmployeeRequest) -> Self {
        NewEmployee {
            employee_code: value.employee_code,
            name: value.name,
            email: value.email,
            department: value.department,
            salary: value.salary.unwrap_or_default(),
        }
    }
}

/// Body of `PUT /api/employees/{employee_code}`.
///
/// Has no employee code field: one sent by the client is silently dropped,
/// the code in the path is the only one that counts.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(value: UpdateEmployeeRequest) -> Self {
        EmployeePatch {
            name: value.name,
            email: value.email,
            department: value.department,
            salary: value.salary,
        }
    }
}

/// A record as returned to clients.
///
/// The employee code is also echoed as `emp_id` for clients written against
/// the legacy field name.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub employee_code: String,
    #[serde(rename = "emp_id")]
    pub legacy_code: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        EmployeeResponse {
            id: value.id.to_string(),
            legacy_code: value.employee_code.clone(),
            employee_code: value.employee_code,
            name: value.name,
            email: value.email,
            department: value.department,
            salary: value.salary,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
