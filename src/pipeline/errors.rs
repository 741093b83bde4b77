//! Pipeline error taxonomy
//!
//! Every failure of an evaluation request is one of these variants; none is
//! retried internally. The boundary layer maps them to status codes via
//! `status_code()` / `IntoResponse`. A reference-query failure is an
//! internal fault (the reference is trusted), so it maps to a server error
//! rather than a validation error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::executor::ExecError;
use crate::validator::{Rejection, RejectionKind};

/// Result type for pipeline operations
pub type CaseResult<T> = Result<T, CaseError>;

/// Terminal failure of one evaluation request
#[derive(Debug, Clone, Error)]
pub enum CaseError {
    /// Validator rejected malformed input
    #[error("{0}")]
    Rejected(String),

    /// Validator rejected a disallowed operation
    #[error("{0}")]
    Forbidden(String),

    /// Learner query failed at execution
    #[error("{0}")]
    Backend(#[from] ExecError),

    /// Case identifier not in the registry
    #[error("Case not found: {0}")]
    UnknownCase(String),

    /// The trusted reference query failed; a deployment defect
    #[error("Reference query execution failed: {0}")]
    ReferenceFailure(String),

    /// Store/session fault outside query execution
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CaseError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CaseError::Rejected(_) => StatusCode::BAD_REQUEST,
            CaseError::Forbidden(_) => StatusCode::FORBIDDEN,
            CaseError::Backend(_) => StatusCode::BAD_REQUEST,
            CaseError::UnknownCase(_) => StatusCode::NOT_FOUND,
            CaseError::ReferenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CaseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Rejection> for CaseError {
    fn from(rejection: Rejection) -> Self {
        match rejection.kind {
            RejectionKind::Malformed => CaseError::Rejected(rejection.reason.to_string()),
            RejectionKind::Forbidden => CaseError::Forbidden(rejection.reason.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<CaseError> for ErrorResponse {
    fn from(err: CaseError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for CaseError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CaseError::Rejected("Query cannot be empty".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CaseError::Forbidden("This operation is not allowed".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            CaseError::UnknownCase("case-999".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CaseError::ReferenceFailure("no such table".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_backend_errors_are_client_errors() {
        let err = CaseError::from(ExecError::classify("no such column: shft"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid column name in query");
    }

    #[test]
    fn test_rejection_kind_mapping() {
        let err: CaseError = Rejection::malformed("Unbalanced parentheses in query").into();
        assert!(matches!(err, CaseError::Rejected(_)));

        let err: CaseError = Rejection {
            kind: RejectionKind::Forbidden,
            reason: "This operation is not allowed",
        }
        .into();
        assert!(matches!(err, CaseError::Forbidden(_)));
    }
}
