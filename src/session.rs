// src/session.rs
//! Screening session: the explicit state machine behind one upload flow

use crate::candidate::UploadCandidate;
use crate::client::ScreenerClient;
use crate::error::ScreenError;
use crate::report;
use crate::types::AnalysisResult;
use std::path::{Path, PathBuf};

/// Lifecycle of a single screening attempt. Submission outcomes live in the
/// state variant, so "loading with an error showing" cannot be represented.
#[derive(Debug, Clone, Default)]
pub enum ScreeningState {
    #[default]
    Idle,
    Ready,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(String),
}

/// Holds the current inputs and drives the Idle → Ready → Submitting →
/// Succeeded/Failed transitions.
///
/// Validation failures are returned to the caller and never transition the
/// state: a rejected file leaves the held candidate, and any held result,
/// untouched so the user can correct and resubmit.
#[derive(Debug, Default)]
pub struct ScreeningSession {
    candidate: Option<UploadCandidate>,
    job_description: String,
    state: ScreeningState,
}

impl ScreeningSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.candidate.as_ref()
    }

    pub fn state(&self) -> &ScreeningState {
        &self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            ScreeningState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            ScreeningState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Validate and hold a resume file, replacing any previous one
    /// wholesale. Rejection leaves the session exactly as it was.
    pub fn attach(&mut self, path: impl Into<PathBuf>) -> Result<(), ScreenError> {
        let candidate = UploadCandidate::from_path(path)?;
        self.attach_candidate(candidate);
        Ok(())
    }

    /// Hold an already-validated candidate. Shared tail of every input path.
    pub fn attach_candidate(&mut self, candidate: UploadCandidate) {
        self.candidate = Some(candidate);
        if matches!(self.state, ScreeningState::Idle | ScreeningState::Failed(_)) {
            self.state = ScreeningState::Ready;
        }
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    fn inputs_complete(&self) -> bool {
        self.candidate.is_some() && !self.job_description.trim().is_empty()
    }

    /// Guard and enter the Submitting state, handing back the inputs to
    /// send. Refuses while a submission is outstanding, and refuses without
    /// both inputs; neither refusal performs any network traffic.
    pub fn begin_submission(&mut self) -> Result<(UploadCandidate, String), ScreenError> {
        if matches!(self.state, ScreeningState::Submitting) {
            return Err(ScreenError::SubmissionInFlight);
        }

        if !self.inputs_complete() {
            return Err(ScreenError::MissingInput);
        }

        let candidate = self.candidate.clone().ok_or(ScreenError::MissingInput)?;
        self.state = ScreeningState::Submitting;
        Ok((candidate, self.job_description.clone()))
    }

    /// Record the submission outcome and return to an interactive state.
    /// A success replaces any previous result wholesale.
    pub fn finish_submission(&mut self, outcome: Result<AnalysisResult, &ScreenError>) {
        self.state = match outcome {
            Ok(result) => ScreeningState::Succeeded(result),
            Err(err) => ScreeningState::Failed(err.to_string()),
        };
    }

    /// Full submission round-trip: guard, POST, record the outcome.
    pub async fn submit(
        &mut self,
        client: &ScreenerClient,
    ) -> Result<AnalysisResult, ScreenError> {
        let (candidate, job_description) = self.begin_submission()?;

        match client.analyze(&candidate, &job_description).await {
            Ok(result) => {
                self.finish_submission(Ok(result.clone()));
                Ok(result)
            }
            Err(err) => {
                self.finish_submission(Err(&err));
                Err(err)
            }
        }
    }

    /// Write the plain-text report for the held result into `dir`. Returns
    /// `None` without touching the filesystem when no result is held.
    pub fn export_report(&self, dir: &Path) -> Result<Option<PathBuf>, ScreenError> {
        match self.result() {
            Some(result) => report::save_report(result, dir).map(Some),
            None => Ok(None),
        }
    }
}
