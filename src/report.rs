use serde::Serialize;
use utoipa::ToSchema;

use crate::store::{HrStore, StoreResult};

/// Label used for employees whose department is unset.
pub const NO_DEPARTMENT: &str = "(none)";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentCount {
    #[schema(example = "R&D", nullable = true)]
    pub department: Option<String>,
    #[schema(example = 4)]
    pub count: i64,
}

impl DepartmentCount {
    pub fn label(&self) -> &str {
        self.department.as_deref().unwrap_or(NO_DEPARTMENT)
    }
}

/// Headcount per department. One count query is issued per distinct
/// department, so the cost grows with the number of departments.
pub async fn department_headcount(store: &dyn HrStore) -> StoreResult<Vec<DepartmentCount>> {
    let mut rows = Vec::new();
    for department in store.departments().await? {
        let count = store.count_in_department(department.as_deref()).await?;
        rows.push(DepartmentCount { department, count });
    }
    rows.sort_by(|a, b| a.department.cmp(&b.department));
    Ok(rows)
}
