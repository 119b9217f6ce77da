use actix_web::{HttpResponse, error::ErrorBadRequest, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    model::{
        attendance::{Attendance, DATETIME_FORMAT, NewAttendance, format_datetime},
        employee::Employee,
    },
    store::HrStore,
};

#[derive(Deserialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "2024-02-01T09:00:00", value_type = String)]
    pub in_time: Option<String>,
    #[schema(example = "2024-02-01T17:30:00", value_type = Option<String>)]
    pub out_time: Option<String>,
}

/// One entry of an attendance listing; times as text, `out_time` null while open.
#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "2024-02-01T09:00:00")]
    pub in_time: String,
    #[schema(example = "2024-02-01T17:30:00", nullable = true)]
    pub out_time: Option<String>,
}

impl From<Attendance> for AttendanceRecord {
    fn from(record: Attendance) -> Self {
        AttendanceRecord {
            id: record.id,
            in_time: format_datetime(&record.in_time),
            out_time: record.out_time.as_ref().map(format_datetime),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceResponse {
    pub employee: Employee,
    pub attendance: Vec<AttendanceRecord>,
}

/// Treats an absent, null or empty field as not supplied.
fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_datetime(field: &str, value: &str) -> actix_web::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|e| {
        tracing::debug!(field, value, error = %e, "Rejected timestamp");
        ErrorBadRequest(format!("{field}: expected YYYY-MM-DDTHH:MM:SS"))
    })
}

/// Mark attendance for an employee
#[utoipa::path(
    post,
    path = "/mark_attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance marked", body = Object, example = json!({
            "message": "Attendance marked successfully"
        })),
        (status = 400, description = "In-time missing", body = Object, example = json!({
            "error": "In-time is required"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<dyn HrStore>,
    path: web::Path<u64>,
    payload: Result<web::Json<MarkAttendance>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let employee_id = path.into_inner();

    let employee = store
        .find_employee(employee_id)
        .await
        .map_err(ApiError::store("find employee", Some(employee_id)))?
        .ok_or(ApiError::EMPLOYEE_NOT_FOUND)?;

    // Body errors only surface once the employee is known to exist.
    let payload = payload?;
    let in_time = supplied(payload.in_time.as_deref())
        .ok_or(ApiError::Validation("In-time is required"))?;
    let in_time = parse_datetime("in_time", in_time)?;
    let out_time = supplied(payload.out_time.as_deref())
        .map(|v| parse_datetime("out_time", v))
        .transpose()?;

    let record = store
        .record_attendance(NewAttendance {
            employee_id: employee.id,
            in_time: Some(in_time),
            out_time,
        })
        .await
        .map_err(ApiError::store("record attendance", Some(employee_id)))?;
    info!(attendance_id = record.id, employee_id, "Attendance marked");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Attendance marked successfully"
    })))
}

/// Attendance history of an employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee with attendance records", body = AttendanceResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
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

    Ok(HttpResponse::Ok().json(AttendanceResponse {
        employee,
        attendance: attendance.into_iter().map(AttendanceRecord::from).collect(),
    }))
}
