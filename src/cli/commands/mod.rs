pub mod applicant;
pub mod application;
pub mod company;
pub mod job;

#[cfg(test)]
#[path = "job_test.rs"]
mod job_test;
