//! Data access for employees and their attendance.
//!
//! Handlers receive an `Arc<dyn HrStore>` through application data. Each call
//! borrows whatever connection it needs for its own duration only; writes
//! commit before returning.

mod memory;
mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

use async_trait::async_trait;

use crate::model::{
    attendance::{Attendance, NewAttendance},
    employee::{Employee, NewEmployee},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("employee {0} does not exist")]
    UnknownEmployee(u64),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait HrStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// Creates the tables if they are absent.
    async fn ensure_schema(&self) -> StoreResult<()>;

    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    async fn create_employee(&self, new: NewEmployee) -> StoreResult<Employee>;

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>>;

    async fn attendance_for(&self, employee_id: u64) -> StoreResult<Vec<Attendance>>;

    async fn record_attendance(&self, new: NewAttendance) -> StoreResult<Attendance>;

    /// Distinct department values; `None` stands for employees with no department.
    async fn departments(&self) -> StoreResult<Vec<Option<String>>>;

    async fn count_in_department(&self, department: Option<&str>) -> StoreResult<i64>;
}
