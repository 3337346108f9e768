//! Session-layer errors.

use pprovider::{ProviderError, UnconfiguredProviderError};
use thiserror::Error;

/// Why a submission ended in `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Unconfigured(#[from] UnconfiguredProviderError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl SubmissionError {
    /// The text published in `RequestStatus::Failed`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unconfigured(error) => error.to_string(),
            Self::Provider(error) => error.user_message(),
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind_label(&self) -> String {
        match self {
            Self::Unconfigured(_) => "unconfigured".to_string(),
            Self::Provider(error) => error.kind.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("submission task did not finish: {0}")]
    Join(#[from] tokio::task::JoinError),
}
