//! Centralized error handling.
//!
//! Every operation failure is one of four kinds: bad input, missing
//! record, uniqueness conflict, or collaborator failure. All of them are
//! shaped into the uniform response envelope at the resolver boundary;
//! the REST surface additionally maps them to HTTP status codes.

use async_graphql::SimpleObject;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// A single (field, message) pair attached to a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Employee not found")]
    EmployeeNotFound,

    /// Uniqueness violation on the named field.
    #[error("{0} already exists")]
    Conflict(String),

    /// A collaborator (media host, hasher) failed.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    /// Envelope `message` for this error. Collaborator failures carry no
    /// stable message of their own, so those use the operation's fallback
    /// (e.g. "Signup failed").
    pub fn envelope_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(_) => "Validation failed".to_string(),
            AppError::UserNotFound => "User not found".to_string(),
            AppError::InvalidPassword => "Invalid password".to_string(),
            AppError::EmployeeNotFound => "Employee not found".to_string(),
            AppError::Conflict(_) => "Duplicate value".to_string(),
            AppError::Upstream(_) | AppError::Database(_) => fallback.to_string(),
        }
    }

    /// Field errors carried by this failure; always at least one.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            AppError::Validation(errors) => errors.clone(),
            AppError::UserNotFound => {
                vec![FieldError::new("usernameOrEmail", "Invalid username/email")]
            }
            AppError::InvalidPassword => vec![FieldError::new("password", "Invalid password")],
            AppError::EmployeeNotFound => {
                vec![FieldError::new("eid", "No employee with this id")]
            }
            AppError::Conflict(field) => {
                vec![FieldError::new(
                    field.clone(),
                    format!("{} already exists", field),
                )]
            }
            AppError::Upstream(msg) => vec![FieldError::new("server", msg.clone())],
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                vec![FieldError::new("server", err.to_string())]
            }
        }
    }

    /// HTTP status for the REST surface.
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound | AppError::EmployeeNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// REST error body, mirroring the envelope shape.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    errors: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            message: self.envelope_message("Request failed"),
            errors: self.field_errors(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
