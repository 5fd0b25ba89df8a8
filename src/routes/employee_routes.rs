use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Json, Response},
    Extension,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    dto::{
        employee_dto::{DeleteOutcome, EmployeeForm},
        Lookup,
    },
    error::{Error, Result},
    models::employee::Employee,
    services::upload_service,
    utils::jwt::Claims,
    AppState,
};

/// Collects the text fields and the optional `image` file from a multipart
/// request into a form. Empty file parts are treated as no upload.
async fn collect_employee_form(mut multipart: Multipart) -> Result<EmployeeForm> {
    let mut form = EmployeeForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let filename = field.file_name().unwrap_or("image").to_string();
            let data = field.bytes().await?;
            if !data.is_empty() {
                form.image = Some(upload_service::store_upload(&filename, data).await?);
            }
        } else {
            let value = field.text().await?;
            form.set_text_field(&name, value);
        }
    }
    Ok(form)
}

#[axum::debug_handler]
pub async fn add_employee(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response> {
    let form = collect_employee_form(multipart).await?;
    let Some(payload) = form.into_create() else {
        return Err(Error::Internal("Failed to add employee".to_string()));
    };

    match state.employee_service.create(payload).await {
        Ok(employee) => Ok(Json(json!({
            "message": "Employee added successfully",
            "employee": employee,
        }))
        .into_response()),
        Err(e) => {
            tracing::error!(error = ?e, "Error adding employee");
            Err(Error::Internal("Failed to add employee".to_string()))
        }
    }
}

#[axum::debug_handler]
pub async fn list_employees(State(state): State<AppState>) -> Result<Response> {
    let employees = state.employee_service.find_all().await?;
    let lookup = if employees.is_empty() {
        Lookup::NotFound("No Employee Found")
    } else {
        Lookup::Found(employees)
    };
    Ok(lookup.into_response())
}

#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let lookup = match state.employee_service.find_by_id(id).await? {
        Some(employee) => Lookup::Found(employee),
        None => Lookup::NotFound("No result found"),
    };
    Ok(lookup.into_response())
}

#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteOutcome>> {
    let deleted_count = state.employee_service.delete(id).await?;
    tracing::info!(actor = %claims.user.email, %id, deleted_count, "employee deleted");
    Ok(Json(DeleteOutcome { deleted_count }))
}

#[axum::debug_handler]
pub async fn update_employee(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Response> {
    let changes = collect_employee_form(multipart).await?;

    match state.employee_service.update(id, changes).await {
        Ok(outcome) => {
            tracing::info!(actor = %claims.user.email, %id, "employee updated");
            Ok(Json(outcome).into_response())
        }
        Err(e) => {
            tracing::error!(error = ?e, "Error updating employee");
            Err(Error::Internal("Failed to update employee".to_string()))
        }
    }
}

#[axum::debug_handler]
pub async fn search_employees(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    match state.employee_service.search(&key).await {
        Ok(employees) => Ok(Json(employees)),
        Err(e) => {
            tracing::error!(error = ?e, "Error during search");
            Err(Error::Internal("Search failed".to_string()))
        }
    }
}
