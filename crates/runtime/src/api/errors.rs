//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, rejected submissions and invalid
//! content so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::{BattleError, ConfigError, DefinitionError, ErrorSeverity, SubmitError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("battle worker command channel closed")]
    CommandChannelClosed,

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("submission rejected: {0}")]
    Rejected(#[source] SubmitError),

    #[error("invalid battle setup")]
    InvalidSetup(#[source] DefinitionError),

    #[error("invalid battle config")]
    InvalidConfig(#[source] ConfigError),
}

impl RuntimeError {
    /// The rejection reason when a submission was ignored.
    pub fn rejection(&self) -> Option<&SubmitError> {
        match self {
            RuntimeError::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    /// Severity of the underlying battle error, if any.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            RuntimeError::Rejected(reason) => Some(reason.severity()),
            RuntimeError::InvalidSetup(reason) => Some(reason.severity()),
            RuntimeError::InvalidConfig(reason) => Some(reason.severity()),
            _ => None,
        }
    }
}
