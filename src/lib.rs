use std::path::Path;

pub mod candidate;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod session;
pub mod types;

pub use candidate::{UploadCandidate, ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES};
pub use client::ScreenerClient;
pub use config::ScreenerConfig;
pub use error::ScreenError;
pub use session::{ScreeningSession, ScreeningState};
pub use types::{AnalysisResult, ScoreBand};

/// Convenience: validate a resume file, submit it with the job description
/// and return the analysis in one call.
pub async fn analyze_resume(
    config: &ScreenerConfig,
    resume: &Path,
    job_description: &str,
) -> Result<AnalysisResult, ScreenError> {
    let mut session = ScreeningSession::new();
    session.attach(resume)?;
    session.set_job_description(job_description);

    let client = ScreenerClient::new(config)?;
    session.submit(&client).await
}
