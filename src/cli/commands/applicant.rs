use std::path::PathBuf;

use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::apply_table_style;
use crate::db::{Applicant, ApplicantRepository, Database, NewApplicant, SqliteDatabase};
use crate::upload::validate_resume;

/// Inputs for creating an applicant profile.
#[derive(Debug)]
pub struct CreateApplicantArgs {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume: PathBuf,
}

#[derive(Tabled)]
struct ApplicantDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Applicant> for ApplicantDisplay {
    fn from(applicant: &Applicant) -> Self {
        Self {
            id: applicant.id,
            name: format!("{} {}", applicant.first_name, applicant.last_name),
            email: applicant.email.clone(),
            phone: applicant.phone.clone(),
        }
    }
}

/// Create an applicant profile.
///
/// The resume file is validated before any row is written; email shape
/// validation belongs to the data layer and is not repeated here.
pub async fn create(db: &SqliteDatabase, args: CreateApplicantArgs) -> CliResult<String> {
    validate_resume(&args.resume)?;

    let applicant = NewApplicant {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email,
        phone: args.phone,
        resume_path: args.resume.display().to_string(),
    };

    let id = db.applicants().insert(&applicant).await?;
    Ok(format!(
        "Profile created for {} {} with id {}",
        args.first_name, args.last_name, id
    ))
}

/// List all applicants
pub async fn list(db: &SqliteDatabase, format: &str) -> CliResult<String> {
    let applicants = db.applicants().list().await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&applicants)?);
    }

    if applicants.is_empty() {
        return Ok("No applicants found".to_string());
    }
    let mut table = Table::new(applicants.iter().map(ApplicantDisplay::from));
    apply_table_style(&mut table);
    Ok(table.to_string())
}
