// src/candidate.rs
//! Upload candidate and the local acceptance rules for resume files

use crate::error::ScreenError;
use std::path::{Path, PathBuf};

/// 2 MiB, matching the backend's upload limit.
pub const MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "doc"];

/// A resume file that has passed local validation and is ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
}

impl UploadCandidate {
    /// Build a candidate from a file on disk, rejecting it before any
    /// network traffic if it breaks the upload rules.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ScreenError> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .unwrap_or_else(|| path.display().to_string());

        let metadata = std::fs::metadata(&path).map_err(|source| ScreenError::Io {
            path: path.clone(),
            source,
        })?;

        Self::from_parts(name, metadata.len(), path)
    }

    /// Build a candidate from already-known attributes. Same acceptance
    /// predicate as `from_path`; the file is not touched.
    pub fn from_parts(
        name: impl Into<String>,
        size: u64,
        path: impl Into<PathBuf>,
    ) -> Result<Self, ScreenError> {
        let name = name.into();
        validate_upload(&name, size)?;

        Ok(Self {
            name,
            size,
            path: path.into(),
        })
    }

    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }

    /// Content type sent with the multipart upload.
    pub fn content_type(&self) -> &'static str {
        match file_extension(&self.name).as_deref() {
            Some("pdf") => "application/pdf",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("doc") => "application/msword",
            _ => "application/octet-stream",
        }
    }
}

/// Get file extension in lowercase
pub fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// The single acceptance predicate for both input paths (browse and
/// programmatic). Size is checked before type, so an oversize PDF reports
/// the size problem.
pub fn validate_upload(name: &str, size: u64) -> Result<(), ScreenError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ScreenError::FileTooLarge { size });
    }

    let accepted = file_extension(name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);

    if !accepted {
        return Err(ScreenError::InvalidFileType {
            name: name.to_string(),
        });
    }

    Ok(())
}
