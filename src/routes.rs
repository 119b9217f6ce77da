use crate::api::{attendance, employee, report};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(employee::index)))
        .service(
            web::resource("/employees")
                .route(web::get().to(employee::list_employees))
                .route(web::post().to(employee::create_employee))
                .default_service(web::to(employee::invalid_method)),
        )
        // /employee/{id}
        .service(
            web::resource("/employee/{id}").route(web::get().to(employee::employee_details)),
        )
        // /mark_attendance/{id}
        .service(
            web::resource("/mark_attendance/{id}")
                .route(web::post().to(attendance::mark_attendance)),
        )
        // /attendance/{id}
        .service(web::resource("/attendance/{id}").route(web::get().to(attendance::get_attendance)))
        .service(web::resource("/report").route(web::get().to(report::report)));
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use crate::model::{
        attendance::{Attendance, NewAttendance},
        employee::{Employee, NewEmployee},
    };
    use crate::store::{HrStore, StoreError, StoreResult};

    /// Builds the full route table over the given `Arc` of a store.
    macro_rules! test_app {
        ($store:expr) => {{
            let store: std::sync::Arc<dyn crate::store::HrStore> = $store;
            actix_web::test::init_service(
                actix_web::App::new()
                    .app_data(actix_web::web::Data::from(store))
                    .configure(crate::routes::configure),
            )
            .await
        }};
    }
    pub(crate) use test_app;

    /// Store whose every call fails as if the database were unreachable.
    pub struct BrokenStore;

    fn pool_timeout() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl HrStore for BrokenStore {
        fn backend_tag(&self) -> &'static str {
            "broken"
        }

        async fn ensure_schema(&self) -> StoreResult<()> {
            Err(pool_timeout())
        }

        async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
            Err(pool_timeout())
        }

        async fn create_employee(&self, _new: NewEmployee) -> StoreResult<Employee> {
            Err(pool_timeout())
        }

        async fn find_employee(&self, _id: u64) -> StoreResult<Option<Employee>> {
            Err(pool_timeout())
        }

        async fn attendance_for(&self, _employee_id: u64) -> StoreResult<Vec<Attendance>> {
            Err(pool_timeout())
        }

        async fn record_attendance(&self, _new: NewAttendance) -> StoreResult<Attendance> {
            Err(pool_timeout())
        }

        async fn departments(&self) -> StoreResult<Vec<Option<String>>> {
            Err(pool_timeout())
        }

        async fn count_in_department(&self, _department: Option<&str>) -> StoreResult<i64> {
            Err(pool_timeout())
        }
    }

    pub fn ann() -> Value {
        json!({
            "name": "Ann",
            "designation": "Eng",
            "department": "R&D",
            "date_joined": "2024-01-10"
        })
    }
}
