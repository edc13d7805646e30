// src/client.rs
//! HTTP client for the resume analysis backend

use crate::candidate::UploadCandidate;
use crate::config::ScreenerConfig;
use crate::error::ScreenError;
use crate::types::AnalysisResult;
use reqwest::multipart::{Form, Part};
use tracing::{error, info, trace};

const UPLOAD_ENDPOINT: &str = "/upload";

/// Thin wrapper over the backend's single endpoint. Holds the resolved base
/// URL so callers never touch ambient configuration.
pub struct ScreenerClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScreenerClient {
    /// Create a client against the configured backend. No request timeout is
    /// set: the backend owns the analysis duration and the session's
    /// in-flight guard is the only throttle.
    pub fn new(config: &ScreenerConfig) -> Result<Self, ScreenError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit the resume and job description as one multipart POST and
    /// return the parsed analysis.
    pub async fn analyze(
        &self,
        candidate: &UploadCandidate,
        job_description: &str,
    ) -> Result<AnalysisResult, ScreenError> {
        let url = format!("{}{}", self.base_url, UPLOAD_ENDPOINT);

        let file_content =
            tokio::fs::read(&candidate.path)
                .await
                .map_err(|source| ScreenError::Io {
                    path: candidate.path.clone(),
                    source,
                })?;

        let form = Form::new()
            .part(
                "resume",
                Part::bytes(file_content)
                    .file_name(candidate.name.clone())
                    .mime_str(candidate.content_type())?,
            )
            .text("job_description", job_description.to_string());

        info!("Submitting resume {} to {}", candidate.name, url);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Analysis service error {}: {}", status, body);
            return Err(ScreenError::Backend { status, body });
        }

        let response_text = response.text().await?;

        let result: AnalysisResult =
            serde_json::from_str(&response_text).map_err(ScreenError::MalformedResponse)?;

        info!("Received analysis with score {}", result.score);
        Ok(result)
    }
}
