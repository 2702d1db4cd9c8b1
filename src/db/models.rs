//! Domain models for the job board.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application. The store owns identity assignment,
//! so each entity comes in two shapes: the persisted row with its id,
//! and a `New*` draft used for insertion.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned row id (auto-increment).
pub type Id = i64;

/// A company that posts job listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Id,
    pub name: String,
    pub location: String,
}

/// Draft company for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub location: String,
}

/// A posted job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: Id,
    pub company_id: Id,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Decimal,
    /// Free-form tag, e.g. "Full-time", "Part-time", "Contract".
    pub job_type: String,
    pub posted_date: DateTime<Utc>,
}

/// Draft job listing; the posting path resolves the company id and
/// stamps the posted date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Decimal,
    pub job_type: String,
}

/// A registered applicant profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Opaque reference to the applicant's resume, e.g. a validated file path.
    pub resume_path: String,
}

/// Draft applicant profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplicant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume_path: String,
}

/// An application an applicant submitted for a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Id,
    pub job_id: Id,
    pub applicant_id: Id,
    pub application_date: DateTime<Utc>,
    pub cover_letter: String,
}

/// Draft application; carries its own recorded submission timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobApplication {
    pub job_id: Id,
    pub applicant_id: Id,
    pub application_date: DateTime<Utc>,
    pub cover_letter: String,
}

/// Email shape check applied before an applicant is persisted.
///
/// Deliberately weak: the rule is "contains an '@'", nothing more. This
/// is the single copy of the rule; the shell does not re-validate.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}
