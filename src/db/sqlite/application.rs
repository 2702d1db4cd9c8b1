//! SQLite ApplicationRepository implementation.

use chrono::{DateTime, Utc};
use tracing::info;

use super::connection::SqliteDatabase;
use super::helpers::insertion_error;
use crate::db::{ApplicationRepository, DbError, DbResult, Id, NewJobApplication};

/// sqlx-backed job application repository.
pub struct SqliteApplicationRepository<'a> {
    pub(crate) db: &'a SqliteDatabase,
}

impl ApplicationRepository for SqliteApplicationRepository<'_> {
    async fn submit(
        &self,
        application: &NewJobApplication,
        deadline: DateTime<Utc>,
    ) -> DbResult<Id> {
        // The deadline is inclusive: a submission dated exactly at the
        // deadline is accepted. Checked before the insert is attempted.
        if application.application_date > deadline {
            return Err(DbError::DeadlineExceeded {
                submitted: application.application_date,
                deadline,
            });
        }

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO applications (job_id, applicant_id, application_date, cover_letter)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(application.job_id)
        .bind(application.applicant_id)
        .bind(application.application_date)
        .bind(&application.cover_letter)
        .execute(&mut conn)
        .await
        .map_err(insertion_error("job application"))?;

        let id = result.last_insert_rowid();
        info!(
            id,
            job_id = application.job_id,
            applicant_id = application.applicant_id,
            "job application submitted"
        );
        Ok(id)
    }
}
