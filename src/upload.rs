//! Resume file validation.
//!
//! Runs before an applicant profile is persisted: the referenced file
//! must exist, stay within the size limit, and be a PDF or Word
//! document. A violation aborts the current operation only.

use std::fs;
use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Maximum accepted resume size in bytes (2 MiB).
pub const MAX_RESUME_BYTES: u64 = 2 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Resume validation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum UploadError {
    #[error("Resume file not found: {path}")]
    #[diagnostic(code(careerhub::upload::not_found))]
    NotFound { path: String },

    #[error("Resume file is {size} bytes; the limit is {limit} bytes")]
    #[diagnostic(code(careerhub::upload::too_large))]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported resume format '{extension}'")]
    #[diagnostic(
        code(careerhub::upload::unsupported_format),
        help("Only PDF and Word documents (.pdf, .doc, .docx) are accepted")
    )]
    UnsupportedFormat { extension: String },

    #[error("Failed to inspect resume file: {0}")]
    #[diagnostic(code(careerhub::upload::io))]
    Io(#[from] std::io::Error),
}

/// Check that a resume file is acceptable before its path is persisted.
pub fn validate_resume(path: &Path) -> Result<(), UploadError> {
    if !path.exists() {
        return Err(UploadError::NotFound {
            path: path.display().to_string(),
        });
    }

    let size = fs::metadata(path)?.len();
    if size > MAX_RESUME_BYTES {
        return Err(UploadError::TooLarge {
            size,
            limit: MAX_RESUME_BYTES,
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::UnsupportedFormat { extension });
    }

    Ok(())
}
