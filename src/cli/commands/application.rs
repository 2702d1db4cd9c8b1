use chrono::{DateTime, NaiveDate, Utc};

use crate::cli::error::{CliError, CliResult};
use crate::db::{ApplicationRepository, Database, Id, NewJobApplication, SqliteDatabase};

/// Inputs for submitting a job application.
#[derive(Debug)]
pub struct SubmitArgs {
    pub job_id: Id,
    pub applicant_id: Id,
    pub deadline: String,
    pub cover_letter: String,
}

/// Submit an application for a job.
///
/// The application is dated now; the deadline day itself still counts.
pub async fn submit(db: &SqliteDatabase, args: SubmitArgs) -> CliResult<String> {
    let deadline = parse_deadline(&args.deadline)?;

    let application = NewJobApplication {
        job_id: args.job_id,
        applicant_id: args.applicant_id,
        application_date: Utc::now(),
        cover_letter: args.cover_letter,
    };

    let id = db.applications().submit(&application, deadline).await?;
    Ok(format!("Application submitted with id {}", id))
}

/// Parse a `yyyy-mm-dd` deadline as the end of that day in UTC.
fn parse_deadline(raw: &str) -> CliResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| CliError::InvalidArgument {
        message: format!("invalid deadline '{}': {} (expected yyyy-mm-dd)", raw, e),
    })?;

    date.and_hms_opt(23, 59, 59)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| CliError::InvalidArgument {
            message: format!("invalid deadline '{}'", raw),
        })
}
