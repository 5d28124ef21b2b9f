use crate::error::Result;
use crate::model::{CreateEmployeeRequest, EmployeeResponse, MessageResponse, UpdateEmployeeRequest};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use roster_core::Locator;

const DELETED_MESSAGE: &str = "Employee deleted";

pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>> {
    let Json(request) = payload?;
    let created = state.directory().create(request.into()).await?;
    Ok(Json(created.into()))
}

pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>> {
    let records = state.directory().list().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

pub async fn update_employee_handler(
    Path(employee_code): Path<String>,
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>> {
    let Json(request) = payload?;
    let updated = state
        .directory()
        .update(&employee_code, request.into())
        .await?;
    Ok(Json(updated.into()))
}

pub async fn delete_employee_by_code_handler(
    Path(employee_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    delete(&state, Locator::by_code(employee_code)).await
}

/// Administrative cleanup path keyed on the internal id.
pub async fn delete_employee_by_id_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    delete(&state, Locator::by_id(id)).await
}

async fn delete(state: &AppState, locator: Locator) -> Result<Json<MessageResponse>> {
    state.directory().delete(&locator).await?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
