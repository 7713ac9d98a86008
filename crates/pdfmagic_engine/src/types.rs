use std::path::PathBuf;

use pdfmagic_core::{OperationKey, SubmissionId, SubmitFailure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service answered with a non-success status.
    #[error("service rejected request with status {status}")]
    Rejected { status: u16, body: String },
    /// The request could not be completed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// A selected file could not be read.
    #[error("could not read {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SubmitError {
    /// Collapses the error into what the submission state machine reports.
    pub fn to_failure(&self) -> SubmitFailure {
        match self {
            SubmitError::Rejected { status, body } => SubmitFailure::Rejected {
                status: *status,
                body: body.clone(),
            },
            SubmitError::Transport(_) | SubmitError::Input { .. } => SubmitFailure::Transport,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(String),
}

#[derive(Debug)]
pub enum EngineEvent {
    SubmissionCompleted {
        submission_id: SubmissionId,
        operation: OperationKey,
        result: Result<Vec<u8>, SubmitError>,
    },
    SaveCompleted {
        file_name: String,
        result: Result<PathBuf, crate::SaveError>,
    },
    HealthChecked {
        result: Result<crate::HealthStatus, SubmitError>,
    },
}
