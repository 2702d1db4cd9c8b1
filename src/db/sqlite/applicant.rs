//! SQLite ApplicantRepository implementation.

use sqlx::Row;
use tracing::debug;

use super::connection::SqliteDatabase;
use super::helpers::{insertion_error, retrieval_error};
use crate::db::{
    Applicant, ApplicantRepository, DbError, DbResult, Id, NewApplicant, is_valid_email,
};

/// sqlx-backed applicant repository.
pub struct SqliteApplicantRepository<'a> {
    pub(crate) db: &'a SqliteDatabase,
}

impl ApplicantRepository for SqliteApplicantRepository<'_> {
    async fn insert(&self, applicant: &NewApplicant) -> DbResult<Id> {
        // Validation happens before any store access.
        if !is_valid_email(&applicant.email) {
            return Err(DbError::InvalidEmail {
                email: applicant.email.clone(),
            });
        }

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO applicants (first_name, last_name, email, phone, resume_path)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&applicant.first_name)
        .bind(&applicant.last_name)
        .bind(&applicant.email)
        .bind(&applicant.phone)
        .bind(&applicant.resume_path)
        .execute(&mut conn)
        .await
        .map_err(insertion_error("applicant"))?;

        let id = result.last_insert_rowid();
        debug!(id, email = %applicant.email, "applicant inserted");
        Ok(id)
    }

    async fn list(&self) -> DbResult<Vec<Applicant>> {
        let mut conn = self.db.acquire().await?;
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, phone, resume_path FROM applicants",
        )
        .fetch_all(&mut conn)
        .await
        .map_err(retrieval_error("applicant"))?;

        Ok(rows
            .into_iter()
            .map(|row| Applicant {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                email: row.get("email"),
                phone: row.get("phone"),
                resume_path: row.get("resume_path"),
            })
            .collect())
    }
}
