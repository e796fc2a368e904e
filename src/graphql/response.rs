//! Response envelopes.
//!
//! Every operation resolves to `{success, message, payload, errors}`.
//! Failures never surface as GraphQL protocol errors; they are shaped
//! here from [`AppError`] with an operation-specific fallback message
//! for collaborator failures.

use async_graphql::SimpleObject;

use super::types::{EmployeeObject, UserObject};
use crate::domain::{Employee, User};
use crate::errors::{AppError, FieldError};

/// Envelope for signup and login.
#[derive(Debug, SimpleObject)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: Option<UserObject>,
    pub errors: Vec<FieldError>,
}

impl AuthResponse {
    pub fn ok(message: impl Into<String>, user: User) -> Self {
        Self {
            success: true,
            message: message.into(),
            user: Some(user.into()),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: AppError, fallback: &str) -> Self {
        Self {
            success: false,
            message: error.envelope_message(fallback),
            user: None,
            errors: error.field_errors(),
        }
    }
}

/// Envelope for single-employee operations.
#[derive(Debug, SimpleObject)]
pub struct EmployeeResponse {
    pub success: bool,
    pub message: String,
    pub employee: Option<EmployeeObject>,
    pub errors: Vec<FieldError>,
}

impl EmployeeResponse {
    pub fn ok(message: impl Into<String>, employee: Employee) -> Self {
        Self {
            success: true,
            message: message.into(),
            employee: Some(employee.into()),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: AppError, fallback: &str) -> Self {
        Self {
            success: false,
            message: error.envelope_message(fallback),
            employee: None,
            errors: error.field_errors(),
        }
    }
}

/// Envelope for employee listings.
#[derive(Debug, SimpleObject)]
pub struct EmployeesResponse {
    pub success: bool,
    pub message: String,
    pub employees: Vec<EmployeeObject>,
    pub errors: Vec<FieldError>,
}

impl EmployeesResponse {
    pub fn ok(message: impl Into<String>, employees: Vec<Employee>) -> Self {
        Self {
            success: true,
            message: message.into(),
            employees: employees.into_iter().map(Into::into).collect(),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: AppError, fallback: &str) -> Self {
        Self {
            success: false,
            message: error.envelope_message(fallback),
            employees: Vec::new(),
            errors: error.field_errors(),
        }
    }
}

/// Envelope for deletions; carries no payload.
#[derive(Debug, SimpleObject)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl DeleteResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: AppError, fallback: &str) -> Self {
        Self {
            success: false,
            message: error.envelope_message(fallback),
            errors: error.field_errors(),
        }
    }
}
