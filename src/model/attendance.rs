use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Wire and form format for attendance timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One clock-in/clock-out interval. `out_time == None` means still clocked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: u64,

    #[serde(serialize_with = "serialize_datetime")]
    #[schema(example = "2024-02-01T09:00:00", value_type = String)]
    pub in_time: NaiveDateTime,

    #[serde(serialize_with = "serialize_optional_datetime")]
    #[schema(example = "2024-02-01T17:30:00", value_type = Option<String>, nullable = true)]
    pub out_time: Option<NaiveDateTime>,

    #[schema(example = 1)]
    pub employee_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub employee_id: u64,
    pub in_time: Option<NaiveDateTime>,
    pub out_time: Option<NaiveDateTime>,
}

impl NewAttendance {
    /// Resolves the stored clock-in time, falling back to the current UTC time.
    pub fn in_time_or_now(&self) -> NaiveDateTime {
        self.in_time.unwrap_or_else(|| Utc::now().naive_utc())
    }

    pub fn with_id(self, id: u64) -> Attendance {
        Attendance {
            id,
            in_time: self.in_time_or_now(),
            out_time: self.out_time,
            employee_id: self.employee_id,
        }
    }
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

fn serialize_datetime<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_datetime(value))
}

fn serialize_optional_datetime<S: Serializer>(
    value: &Option<NaiveDateTime>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => s.serialize_str(&format_datetime(v)),
        None => s.serialize_none(),
    }
}
