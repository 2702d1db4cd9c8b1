//! SQLite JobRepository implementation.

use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::Row;
use tracing::info;

use super::company::SqliteCompanyRepository;
use super::connection::SqliteDatabase;
use super::helpers::{insertion_error, retrieval_error};
use crate::db::{
    CompanyRepository, DbError, DbResult, Id, JobListing, JobRepository, NewCompany, NewJobListing,
};

/// sqlx-backed job listing repository.
pub struct SqliteJobRepository<'a> {
    pub(crate) db: &'a SqliteDatabase,
}

impl SqliteJobRepository<'_> {
    /// Resolve the company id for a posting, inserting the company first
    /// when no row with that name exists yet.
    ///
    /// No uniqueness is enforced on company names, so interleaved posts
    /// for the same new name can each miss the lookup and insert,
    /// leaving duplicate rows; resolution then settles on the lowest id.
    async fn resolve_or_insert_company(&self, company: &NewCompany) -> DbResult<Id> {
        let companies = SqliteCompanyRepository { db: self.db };
        if let Some(id) = companies.resolve_id(&company.name).await? {
            return Ok(id);
        }

        companies.insert(company).await?;
        companies
            .resolve_id(&company.name)
            .await?
            .ok_or_else(|| DbError::Retrieval {
                entity: "company".to_string(),
                message: format!("no id found for company '{}' after insert", company.name),
            })
    }
}

impl JobRepository for SqliteJobRepository<'_> {
    async fn post(&self, job: &NewJobListing, company: &NewCompany) -> DbResult<Id> {
        let company_id = self.resolve_or_insert_company(company).await?;
        let posted_date = Utc::now();

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO jobs (company_id, title, description, location, salary, job_type, posted_date)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(company_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.salary.to_string())
        .bind(&job.job_type)
        .bind(posted_date)
        .execute(&mut conn)
        .await
        .map_err(insertion_error("job listing"))?;

        let id = result.last_insert_rowid();
        info!(id, company_id, title = %job.title, "job listing posted");
        Ok(id)
    }

    async fn list(&self) -> DbResult<Vec<JobListing>> {
        let mut conn = self.db.acquire().await?;
        let rows = sqlx::query(
            "SELECT id, company_id, title, description, location, salary, job_type, posted_date FROM jobs",
        )
        .fetch_all(&mut conn)
        .await
        .map_err(retrieval_error("job listing"))?;

        rows.into_iter()
            .map(|row| {
                let raw: String = row.get("salary");
                let salary = Decimal::from_str(&raw).map_err(|e| DbError::Retrieval {
                    entity: "job listing".to_string(),
                    message: format!("unparseable salary '{}': {}", raw, e),
                })?;

                Ok(JobListing {
                    id: row.get("id"),
                    company_id: row.get("company_id"),
                    title: row.get("title"),
                    description: row.get("description"),
                    location: row.get("location"),
                    salary,
                    job_type: row.get("job_type"),
                    posted_date: row.get("posted_date"),
                })
            })
            .collect()
    }

    async fn average_salary(&self) -> DbResult<Decimal> {
        let listings = self.list().await?;
        if listings.is_empty() {
            return Err(DbError::InvalidData {
                message: "no job listings available to average".to_string(),
                help: "Post at least one job before asking for the average salary".to_string(),
            });
        }

        let mut total = Decimal::ZERO;
        for job in &listings {
            if job.salary < Decimal::ZERO {
                return Err(DbError::InvalidData {
                    message: format!("negative salary found for job id {}", job.id),
                    help: "Salaries must be non-negative".to_string(),
                });
            }
            total += job.salary;
        }

        Ok(total / Decimal::from(listings.len() as u64))
    }
}
