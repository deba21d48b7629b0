//! # Errors
//!
//! This module defines the errors for the report module

use crate::bridge::json::LoaderError;

use thiserror::Error;

/// Report result type
pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to load source for {label}: {source}")]
    Load { label: String, source: LoaderError },
    #[error("could not write report: {0}")]
    Io(std::io::Error),
    #[error("could not serialize report: {0}")]
    Json(serde_json::Error),
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
