use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Ann",
        "designation": "Eng",
        "department": "R&D",
        "date_joined": "2024-01-10"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Ann")]
    pub name: String,

    #[schema(example = "Eng", nullable = true)]
    pub designation: Option<String>,

    #[schema(example = "R&D", nullable = true)]
    pub department: Option<String>,

    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date_joined: NaiveDate,
}

/// Employee fields supplied at creation; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub date_joined: NaiveDate,
}

impl NewEmployee {
    pub fn with_id(self, id: u64) -> Employee {
        Employee {
            id,
            name: self.name,
            designation: self.designation,
            department: self.department,
            date_joined: self.date_joined,
        }
    }
}
