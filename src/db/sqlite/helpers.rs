//! Shared helper functions for SQLite repositories.

use crate::db::DbError;

/// Map a write failure. Store-level rejections (constraint violations,
/// type mismatches) become `Insertion`; everything else is treated as a
/// transport problem and becomes `Connection`.
pub(crate) fn insertion_error(entity: &'static str) -> impl Fn(sqlx::Error) -> DbError {
    move |e| match e {
        sqlx::Error::Database(db) => DbError::Insertion {
            entity: entity.to_string(),
            message: db.to_string(),
        },
        other => DbError::Connection {
            message: other.to_string(),
        },
    }
}

/// Map a read failure, analogous to [`insertion_error`].
pub(crate) fn retrieval_error(entity: &'static str) -> impl Fn(sqlx::Error) -> DbError {
    move |e| match e {
        sqlx::Error::Database(db) => DbError::Retrieval {
            entity: entity.to_string(),
            message: db.to_string(),
        },
        other => DbError::Connection {
            message: other.to_string(),
        },
    }
}
