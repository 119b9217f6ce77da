use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use super::{HrStore, StoreError, StoreResult};
use crate::model::{
    attendance::{Attendance, NewAttendance},
    employee::{Employee, NewEmployee},
};

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(80) NOT NULL,
        designation VARCHAR(50) NULL,
        department VARCHAR(50) NULL,
        date_joined DATE NOT NULL
    )
"#;

const CREATE_ATTENDANCE_RECORDS: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance_records (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        in_time DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        out_time DATETIME NULL,
        employee_id BIGINT UNSIGNED NOT NULL,
        CONSTRAINT fk_attendance_employee FOREIGN KEY (employee_id) REFERENCES employees (id)
    )
"#;

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HrStore for MySqlStore {
    fn backend_tag(&self) -> &'static str {
        "mysql"
    }

    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_EMPLOYEES).execute(&self.pool).await?;
        sqlx::query(CREATE_ATTENDANCE_RECORDS)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, designation, department, date_joined
            FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn create_employee(&self, new: NewEmployee) -> StoreResult<Employee> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, designation, department, date_joined)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new.name)
        .bind(&new.designation)
        .bind(&new.department)
        .bind(new.date_joined)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = result.last_insert_id();
        debug!(employee_id = id, "Inserted employee");
        Ok(new.with_id(id))
    }

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, designation, department, date_joined
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn attendance_for(&self, employee_id: u64) -> StoreResult<Vec<Attendance>> {
        let records = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, in_time, out_time, employee_id
            FROM attendance_records
            WHERE employee_id = ?
            ORDER BY id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn record_attendance(&self, new: NewAttendance) -> StoreResult<Attendance> {
        let in_time = new.in_time_or_now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO attendance_records (in_time, out_time, employee_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(in_time)
        .bind(new.out_time)
        .bind(new.employee_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_foreign_key_violation() {
                    return StoreError::UnknownEmployee(new.employee_id);
                }
            }
            StoreError::Database(e)
        })?;

        tx.commit().await?;

        let id = result.last_insert_id();
        debug!(attendance_id = id, employee_id = new.employee_id, "Inserted attendance");
        Ok(NewAttendance {
            in_time: Some(in_time),
            ..new
        }
        .with_id(id))
    }

    async fn departments(&self) -> StoreResult<Vec<Option<String>>> {
        let departments =
            sqlx::query_scalar::<_, Option<String>>("SELECT DISTINCT department FROM employees")
                .fetch_all(&self.pool)
                .await?;
        Ok(departments)
    }

    async fn count_in_department(&self, department: Option<&str>) -> StoreResult<i64> {
        // `<=>` is MySQL's null-safe equality, so `None` counts unassigned employees.
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE department <=> ?",
        )
        .bind(department)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

/// These run against a real server only when `TEST_DATABASE_URL` points at
/// one; each test works in its own throwaway database.
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::{NaiveDate, Utc};
    use sqlx::{
        Executor,
        mysql::{MySqlConnectOptions, MySqlPoolOptions},
    };

    use super::*;

    struct TestDb {
        admin: MySqlPool,
        name: String,
        store: MySqlStore,
    }

    impl TestDb {
        async fn create() -> Option<Self> {
            let url = std::env::var("TEST_DATABASE_URL").ok()?;
            let options = MySqlConnectOptions::from_str(&url).ok()?;
            let admin = MySqlPoolOptions::new()
                .max_connections(1)
                .connect_with(options.clone())
                .await
                .ok()?;
            let name = format!("hrms_test_{}", Utc::now().timestamp_nanos_opt()?);
            admin
                .execute(format!("CREATE DATABASE `{name}`").as_str())
                .await
                .ok()?;
            let pool = MySqlPoolOptions::new()
                .max_connections(2)
                .connect_with(options.database(&name))
                .await
                .ok()?;
            let store = MySqlStore::new(pool);
            store.ensure_schema().await.ok()?;
            Some(Self { admin, name, store })
        }

        async fn drop_database(self) {
            self.store.pool.close().await;
            let _ = self
                .admin
                .execute(format!("DROP DATABASE IF EXISTS `{}`", self.name).as_str())
                .await;
        }
    }

    fn hire(name: &str, department: Option<&str>) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            designation: Some("Eng".to_string()),
            department: department.map(str::to_string),
            date_joined: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    #[actix_web::test]
    async fn committed_rows_read_back() {
        let Some(db) = TestDb::create().await else {
            return;
        };
        let store = &db.store;

        let ann = store.create_employee(hire("Ann", Some("R&D"))).await.unwrap();
        assert_eq!(store.find_employee(ann.id).await.unwrap(), Some(ann.clone()));
        assert_eq!(store.list_employees().await.unwrap(), vec![ann.clone()]);

        let in_time = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let record = store
            .record_attendance(NewAttendance {
                employee_id: ann.id,
                in_time: Some(in_time),
                out_time: None,
            })
            .await
            .unwrap();
        assert_eq!(store.attendance_for(ann.id).await.unwrap(), vec![record]);

        db.drop_database().await;
    }

    #[actix_web::test]
    async fn departments_and_counts_cover_null() {
        let Some(db) = TestDb::create().await else {
            return;
        };
        let store = &db.store;

        for (name, department) in [("Ann", Some("R&D")), ("Bob", None), ("Cid", Some("R&D"))] {
            store.create_employee(hire(name, department)).await.unwrap();
        }

        let mut departments = store.departments().await.unwrap();
        departments.sort();
        assert_eq!(departments, vec![None, Some("R&D".to_string())]);
        assert_eq!(store.count_in_department(Some("R&D")).await.unwrap(), 2);
        assert_eq!(store.count_in_department(None).await.unwrap(), 1);

        db.drop_database().await;
    }

    #[actix_web::test]
    async fn foreign_key_violation_is_unknown_employee() {
        let Some(db) = TestDb::create().await else {
            return;
        };

        let err = db
            .store
            .record_attendance(NewAttendance {
                employee_id: 404,
                in_time: None,
                out_time: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownEmployee(404)));
        assert!(db.store.attendance_for(404).await.unwrap().is_empty());

        db.drop_database().await;
    }
}
