use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use student_api::{StoreError, StoreErrorKind};

/// Store call a handler was making when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Update,
    Delete,
    Fetch,
}

impl Operation {
    /// Fixed response text for a store-side failure of this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Insert => "Failed to insert item",
            Operation::Update => "Failed to update item",
            Operation::Delete => "Failed to delete item",
            Operation::Fetch => "Failed to fetch items",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Insert => f.write_str("insert"),
            Operation::Update => f.write_str("update"),
            Operation::Delete => f.write_str("delete"),
            Operation::Fetch => f.write_str("fetch"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{op}: {source}")]
    Store {
        op: Operation,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn store(op: Operation) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::Store { op, source }
    }

    /// Status and fixed plain-text body. Client mistakes are 400,
    /// everything the store did wrong is 500.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
            ApiError::Store { op, source } => match source.kind() {
                StoreErrorKind::InvalidIdentifier => (StatusCode::BAD_REQUEST, "Invalid identifier"),
                StoreErrorKind::Unavailable => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Database connection failed")
                }
                StoreErrorKind::OperationFailed => {
                    (StatusCode::INTERNAL_SERVER_ERROR, op.failure_message())
                }
            },
        }
    }
}

/// Body that axum could not decode (wrong content type, duplicate or
/// malformed fields) gets the same fixed answer as a missing field.
impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, message).into_response()
    }
}
