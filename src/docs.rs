use crate::api::attendance::{AttendanceRecord, AttendanceResponse, MarkAttendance};
use crate::api::employee::CreateEmployee;
use crate::model::{attendance::Attendance, employee::Employee};
use crate::report::DepartmentCount;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS",
        version = "0.1.0",
        description = r#"
## Human Resource Management System

Employee records, attendance tracking and a department headcount report.

- **Employees**: list, view and create employees
- **Attendance**: mark clock-in/clock-out intervals and list them per employee
- **Report**: employee count per department

Pages are served as HTML; write endpoints and the attendance listing speak JSON.
Timestamps use the `YYYY-MM-DDTHH:MM:SS` format.
"#,
    ),
    paths(
        crate::api::employee::index,
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::employee_details,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,

        crate::api::report::report
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            MarkAttendance,
            AttendanceRecord,
            AttendanceResponse,
            DepartmentCount
        )
    ),
    tags(
        (name = "Employee", description = "Employee pages and creation"),
        (name = "Attendance", description = "Attendance marking and history"),
        (name = "Report", description = "Department headcount"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/employees",
            "/employee/{employee_id}",
            "/mark_attendance/{employee_id}",
            "/attendance/{employee_id}",
            "/report",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
