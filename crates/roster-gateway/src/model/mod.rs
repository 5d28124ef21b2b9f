mod employee;
mod health;

pub use employee::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
pub use health::HealthResponse;

use serde::{Deserialize, Serialize};

/// Body of error responses and delete confirmations.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
