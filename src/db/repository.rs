//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Every operation runs as a single unit of work: one connection,
//! acquired for the call and released on every exit path.

#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::db::{
    DbResult,
    models::{
        Applicant, Company, Id, JobListing, NewApplicant, NewCompany, NewJobApplication,
        NewJobListing,
    },
};

/// Repository for Company operations.
pub trait CompanyRepository {
    /// Insert a company unconditionally and return its store-assigned id.
    ///
    /// This layer performs no name dedup; dedup happens only in the
    /// job-posting path via [`JobRepository::post`].
    async fn insert(&self, company: &NewCompany) -> DbResult<Id>;

    /// Look up a company id by exact name match.
    ///
    /// Returns `None` when no company with that name exists. When
    /// duplicate rows share the name, the lowest id wins.
    async fn resolve_id(&self, name: &str) -> DbResult<Option<Id>>;

    /// Get all companies in store order.
    async fn list(&self) -> DbResult<Vec<Company>>;
}

/// Repository for JobListing operations.
pub trait JobRepository {
    /// Post a job for the named company.
    ///
    /// Resolves the company by name; if absent, inserts it first and
    /// re-resolves, so a job row is never created with a dangling
    /// company reference. The job row is stamped with the current time
    /// as its posted date. Returns the new job id.
    async fn post(&self, job: &NewJobListing, company: &NewCompany) -> DbResult<Id>;

    /// Get all job listings in store order.
    async fn list(&self) -> DbResult<Vec<JobListing>>;

    /// Arithmetic mean of all listing salaries, as an exact decimal.
    ///
    /// Fails with `InvalidData` when no listings exist or when any
    /// listing carries a negative salary.
    async fn average_salary(&self) -> DbResult<Decimal>;
}

/// Repository for Applicant operations.
pub trait ApplicantRepository {
    /// Insert an applicant profile and return its store-assigned id.
    ///
    /// Validates the email shape first and fails with `InvalidEmail`
    /// without touching the store.
    async fn insert(&self, applicant: &NewApplicant) -> DbResult<Id>;

    /// Get all applicants in store order.
    async fn list(&self) -> DbResult<Vec<Applicant>>;
}

/// Repository for JobApplication operations.
pub trait ApplicationRepository {
    /// Submit an application against the given deadline.
    ///
    /// Fails with `DeadlineExceeded` when the application's recorded
    /// date is strictly after the deadline; a date equal to the
    /// deadline is accepted. On success the row carries the
    /// application's own recorded timestamp.
    async fn submit(&self, application: &NewJobApplication, deadline: DateTime<Utc>)
    -> DbResult<Id>;
}

/// Combined database interface.
///
/// Repositories are exposed via associated types, avoiding dynamic
/// dispatch.
pub trait Database {
    type Companies<'a>: CompanyRepository
    where
        Self: 'a;
    type Jobs<'a>: JobRepository
    where
        Self: 'a;
    type Applicants<'a>: ApplicantRepository
    where
        Self: 'a;
    type Applications<'a>: ApplicationRepository
    where
        Self: 'a;

    /// Apply pending schema migrations.
    async fn migrate(&self) -> DbResult<()>;

    fn companies(&self) -> Self::Companies<'_>;

    fn jobs(&self) -> Self::Jobs<'_>;

    fn applicants(&self) -> Self::Applicants<'_>;

    fn applications(&self) -> Self::Applications<'_>;
}
