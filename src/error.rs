// src/error.rs
//! Error taxonomy for the screening client

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between picking a file and holding a result.
///
/// Validation variants are detected locally before any network call and are
/// recoverable by correcting the input; the remaining variants wrap the
/// submission round-trip.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("File too large. Maximum size allowed is 2MB.")]
    FileTooLarge { size: u64 },

    #[error("Invalid file type. Please upload PDF, DOC, or DOCX files only.")]
    InvalidFileType { name: String },

    #[error("Please upload a resume and provide a job description.")]
    MissingInput,

    #[error("An analysis request is already in flight")]
    SubmissionInFlight,

    #[error("Analysis service returned HTTP {status}: {body}")]
    Backend { status: StatusCode, body: String },

    #[error("Failed to reach analysis service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse analysis response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ScreenError {
    /// True for errors the user can fix without touching the backend.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScreenError::FileTooLarge { .. }
                | ScreenError::InvalidFileType { .. }
                | ScreenError::MissingInput
        )
    }
}
