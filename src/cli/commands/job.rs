use std::str::FromStr;

use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, format_datetime, truncate_with_ellipsis};
use crate::db::{Database, JobListing, JobRepository, NewCompany, NewJobListing, SqliteDatabase};

/// Inputs for posting a job.
#[derive(Debug)]
pub struct PostJobArgs {
    pub company: String,
    pub company_location: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
}

#[derive(Tabled)]
struct JobDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Type")]
    job_type: String,
    #[tabled(rename = "Posted")]
    posted: String,
}

impl From<&JobListing> for JobDisplay {
    fn from(job: &JobListing) -> Self {
        Self {
            id: job.id,
            title: truncate_with_ellipsis(&job.title, 40),
            location: job.location.clone(),
            salary: job.salary.to_string(),
            job_type: job.job_type.clone(),
            posted: format_datetime(&job.posted_date),
        }
    }
}

/// Post a job, creating the company when it does not exist yet.
pub async fn post(db: &SqliteDatabase, args: PostJobArgs) -> CliResult<String> {
    let salary = parse_salary(&args.salary)?;

    let job = NewJobListing {
        title: args.title.clone(),
        description: args.description,
        location: args.location,
        salary,
        job_type: args.job_type,
    };
    let company = NewCompany {
        name: args.company,
        location: args.company_location,
    };

    let id = db.jobs().post(&job, &company).await?;
    Ok(format!("Job '{}' posted with id {}", args.title, id))
}

/// List all job listings
pub async fn list(db: &SqliteDatabase, format: &str) -> CliResult<String> {
    let listings = db.jobs().list().await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&listings)?);
    }

    if listings.is_empty() {
        return Ok("No job listings found".to_string());
    }
    let mut table = Table::new(listings.iter().map(JobDisplay::from));
    apply_table_style(&mut table);
    Ok(table.to_string())
}

/// Average salary across all listings
pub async fn average_salary(db: &SqliteDatabase) -> CliResult<String> {
    let average = db.jobs().average_salary().await?;
    Ok(format!("Average salary: {}", average))
}

fn parse_salary(raw: &str) -> CliResult<Decimal> {
    Decimal::from_str(raw).map_err(|e| CliError::InvalidArgument {
        message: format!("invalid salary '{}': {}", raw, e),
    })
}
