use std::collections::BTreeSet;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{HrStore, StoreError, StoreResult};
use crate::model::{
    attendance::{Attendance, NewAttendance},
    employee::{Employee, NewEmployee},
};

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    attendance: Vec<Attendance>,
}

/// Process-local store. Ids start at 1 and increase per table, mirroring
/// auto-increment columns.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HrStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn ensure_schema(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.tables.lock().await.employees.clone())
    }

    async fn create_employee(&self, new: NewEmployee) -> StoreResult<Employee> {
        let mut tables = self.tables.lock().await;
        let employee = new.with_id(tables.employees.len() as u64 + 1);
        tables.employees.push(employee.clone());
        Ok(employee)
    }

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        let tables = self.tables.lock().await;
        Ok(tables.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn attendance_for(&self, employee_id: u64) -> StoreResult<Vec<Attendance>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn record_attendance(&self, new: NewAttendance) -> StoreResult<Attendance> {
        let mut tables = self.tables.lock().await;
        if !tables.employees.iter().any(|e| e.id == new.employee_id) {
            return Err(StoreError::UnknownEmployee(new.employee_id));
        }
        let record = new.with_id(tables.attendance.len() as u64 + 1);
        tables.attendance.push(record.clone());
        Ok(record)
    }

    async fn departments(&self) -> StoreResult<Vec<Option<String>>> {
        let tables = self.tables.lock().await;
        let distinct: BTreeSet<Option<String>> = tables
            .employees
            .iter()
            .map(|e| e.department.clone())
            .collect();
        Ok(distinct.into_iter().collect())
    }

    async fn count_in_department(&self, department: Option<&str>) -> StoreResult<i64> {
        let tables = self.tables.lock().await;
        let count = tables
            .employees
            .iter()
            .filter(|e| e.department.as_deref() == department)
            .count();
        Ok(count as i64)
    }
}
