//! Shared repository plumbing: duplicate-key classification.
//!
//! The store reports uniqueness violations through driver-specific
//! errors; everything above the repository layer only ever sees
//! `AppError::Conflict(field)`.

use sea_orm::{DbErr, SqlErr};

use crate::errors::AppError;

/// Find which declared unique column a constraint-violation message
/// refers to. Index names embed the column name (`users_email_key`), so
/// a substring match against the declared columns is enough.
pub(crate) fn unique_field_in<'a>(message: &str, unique_fields: &[&'a str]) -> Option<&'a str> {
    unique_fields
        .iter()
        .copied()
        .find(|field| message.contains(field))
}

/// Translate a write error, turning unique-constraint violations into
/// `Conflict` on the first matching declared field.
pub(crate) fn classify_write_err(err: DbErr, unique_fields: &[&str]) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
        let field = unique_field_in(&message, unique_fields)
            .or_else(|| unique_fields.first().copied())
            .unwrap_or("field");
        return AppError::Conflict(field.to_string());
    }
    AppError::Database(err)
}
