//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive
//! macros. The error types are storage-backend agnostic.

use chrono::{DateTime, Utc};
use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Connection error: {message}")]
    #[diagnostic(code(careerhub::db::connection))]
    Connection { message: String },

    #[error("Failed to insert {entity}: {message}")]
    #[diagnostic(code(careerhub::db::insertion))]
    Insertion { entity: String, message: String },

    #[error("Failed to retrieve {entity}: {message}")]
    #[diagnostic(code(careerhub::db::retrieval))]
    Retrieval { entity: String, message: String },

    #[error("Invalid email format: '{email}'")]
    #[diagnostic(
        code(careerhub::db::invalid_email),
        help("An email address must contain an '@'")
    )]
    InvalidEmail { email: String },

    #[error("Application submitted after the deadline ({deadline})")]
    #[diagnostic(code(careerhub::db::deadline_exceeded))]
    DeadlineExceeded {
        submitted: DateTime<Utc>,
        deadline: DateTime<Utc>,
    },

    #[error("Invalid data: {message}")]
    #[diagnostic(code(careerhub::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(careerhub::db::migration))]
    Migration { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
