//! Error types shared by every transaction handler.

use thiserror::Error;

/// Outcome of a failed transaction application.
///
/// `InvalidTransaction` is the submitter's fault and is reported back to
/// them. `InternalError` signals a host, transport or storage problem; the
/// surrounding runtime decides whether to retry the batch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApplyError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidTransaction(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// The message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidTransaction(msg) | Self::InternalError(msg) => msg,
        }
    }

    pub fn is_invalid_transaction(&self) -> bool {
        matches!(self, Self::InvalidTransaction(_))
    }
}

/// A family name that no handler is built for.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("No such tp family : {0}")]
pub struct UnknownFamily(pub String);
