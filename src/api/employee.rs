use actix_web::{HttpResponse, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use super::html;
use crate::{
    error::ApiError,
    model::employee::NewEmployee,
    store::HrStore,
    views::{EmployeeDetailsPage, EmployeeListPage},
};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Ann", value_type = String)]
    pub name: String,
    #[schema(example = "Eng", value_type = Option<String>)]
    pub designation: Option<String>,
    #[schema(example = "R&D", value_type = Option<String>)]
    pub department: Option<String>,
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub date_joined: chrono::NaiveDate,
}

impl From<CreateEmployee> for NewEmployee {
    fn from(payload: CreateEmployee) -> Self {
        NewEmployee {
            name: payload.name,
            designation: payload.designation,
            department: payload.department,
            date_joined: payload.date_joined,
        }
    }
}

async fn employee_list_page(store: &dyn HrStore, title: &str) -> Result<HttpResponse, ApiError> {
    let employees = store
        .list_employees()
        .await
        .map_err(ApiError::store("list employees", None))?;
    Ok(html(
        EmployeeListPage {
            title,
            employees: &employees,
        }
        .to_string(),
    ))
}

/// Landing page listing all employees
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Employee list page", content_type = "text/html", body = String)
    ),
    tag = "Employee"
)]
pub async fn index(store: web::Data<dyn HrStore>) -> Result<HttpResponse, ApiError> {
    employee_list_page(store.get_ref(), "HRMS").await
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "Employee list page", content_type = "text/html", body = String)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<dyn HrStore>) -> Result<HttpResponse, ApiError> {
    employee_list_page(store.get_ref(), "Employees").await
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created successfully", body = Object, example = json!({
            "message": "Employee created successfully.",
            "id": 1
        })),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Something went wrong, Contact with system admin"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn HrStore>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let employee = store
        .create_employee(payload.into_inner().into())
        .await
        .map_err(ApiError::store("create employee", None))?;
    info!(employee_id = employee.id, name = %employee.name, "Employee created");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee created successfully.",
        "id": employee.id
    })))
}

/// Any other method on `/employees`.
pub async fn invalid_method() -> HttpResponse {
    HttpResponse::build(StatusCode::METHOD_NOT_ALLOWED).json(json!({
        "error": "Invalid request method."
    }))
}

/// Employee details page with attendance history
#[utoipa::path(
    get,
    path = "/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee details page", content_type = "text/html", body = String),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn employee_details(
    store: web::Data<dyn HrStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let employee = store
        .find_employee(employee_id)
        .await
        .map_err(ApiError::store("find employee", Some(employee_id)))?
        .ok_or(ApiError::EMPLOYEE_NOT_FOUND)?;
    let attendance = store
        .attendance_for(employee.id)
        .await
        .map_err(ApiError::store("list attendance", Some(employee_id)))?;

    Ok(html(
        EmployeeDetailsPage {
            employee: &employee,
            attendance: &attendance,
        }
        .to_string(),
    ))
}
