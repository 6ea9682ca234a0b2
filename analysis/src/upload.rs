//! Upload workflow: file validation, stage labels, and the post-upload outcome.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::error::ApiError;
use crate::progress::{ProgressPhase, ProgressTracker};
use crate::types::UploadResponse;

pub const PDF_MIME: &str = "application/pdf";

/// A file picked by the user, before upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl SelectedFile {
    /// Accepts files with a `.pdf` extension or a PDF mime type.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.mime.eq_ignore_ascii_case(PDF_MIME)
            || std::path::Path::new(&self.name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }

    /// Size shown next to the file name, e.g. `"2.40 MB"`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_megabytes(self.size)
    }
}

/// `bytes` as megabytes with two decimals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Human label for where an upload currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStage {
    Idle,
    Uploading,
    Extracting,
    Analyzing,
    Complete,
}

impl UploadStage {
    /// Stage implied by the upload tracker.
    #[must_use]
    pub fn from_tracker(tracker: &ProgressTracker) -> Self {
        match tracker.phase() {
            ProgressPhase::Idle => Self::Idle,
            ProgressPhase::Complete => Self::Complete,
            ProgressPhase::Running => match tracker.percent() {
                p if p < 20.0 => Self::Uploading,
                p if p < 40.0 => Self::Extracting,
                _ => Self::Analyzing,
            },
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Uploading => "Uploading PDF...",
            Self::Extracting => "Extracting text & creating chunks...",
            Self::Analyzing => "Running 7 AI analyses...",
            Self::Complete => "Complete!",
        }
    }
}

/// What happened to an upload once the backend answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A new contract was created and analyzed.
    Created(String),
    /// The same file was already uploaded; the existing contract is reused.
    Duplicate(String),
    Failed(String),
}

impl UploadOutcome {
    #[must_use]
    pub fn from_response(response: Result<UploadResponse, ApiError>) -> Self {
        match response {
            Ok(UploadResponse { id, is_duplicate: true }) => Self::Duplicate(id),
            Ok(UploadResponse { id, is_duplicate: false }) => Self::Created(id),
            Err(err) => Self::Failed(err.user_message()),
        }
    }

    /// Results route to navigate to, for both success variants.
    #[must_use]
    pub fn destination(&self) -> Option<String> {
        match self {
            Self::Created(id) | Self::Duplicate(id) => Some(results_route(id)),
            Self::Failed(_) => None,
        }
    }

    /// Notification text for the outcome.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::Created(_) => "Analysis complete! Redirecting...".to_owned(),
            Self::Duplicate(_) => "This contract was already uploaded. Opening existing analysis.".to_owned(),
            Self::Failed(message) => format!("Upload failed: {message}"),
        }
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Client route of the results page for `id`.
#[must_use]
pub fn results_route(id: &str) -> String {
    format!("/results/{id}")
}
