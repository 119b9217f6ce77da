use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::store::StoreError;

/// Errors a handler answers with a JSON `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(&'static str),

    #[error("{operation} failed: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub const EMPLOYEE_NOT_FOUND: Self = ApiError::NotFound("Employee not found");

    /// `map_err` adapter for store calls: tags the failure with the operation
    /// and logs it at the call site.
    pub fn store(
        operation: &'static str,
        employee_id: Option<u64>,
    ) -> impl FnOnce(StoreError) -> ApiError {
        move |source| {
            match &source {
                StoreError::UnknownEmployee(id) => {
                    tracing::debug!(operation, employee_id = id, "Employee vanished before write");
                }
                StoreError::Database(e) => {
                    tracing::error!(error = %e, operation, employee_id = ?employee_id, "Store operation failed");
                }
            }
            ApiError::Store { operation, source }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store {
                source: StoreError::UnknownEmployee(_),
                ..
            } => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::NotFound(msg) | ApiError::Validation(msg) => *msg,
            ApiError::Store {
                source: StoreError::UnknownEmployee(_),
                ..
            } => "Employee not found",
            ApiError::Store { .. } => "Something went wrong, Contact with system admin",
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
