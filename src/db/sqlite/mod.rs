//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module. One file per entity.

mod applicant;
mod application;
mod company;
mod connection;
mod helpers;
mod job;

#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod job_test;

pub use applicant::SqliteApplicantRepository;
pub use application::SqliteApplicationRepository;
pub use company::SqliteCompanyRepository;
pub use connection::SqliteDatabase;
pub use job::SqliteJobRepository;
