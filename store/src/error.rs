use tally_types::{Address, ApplyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The external state context failed the read or write.
    #[error("state context error: {0}")]
    Context(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupt state at {address}: {reason}")]
    Corruption { address: Address, reason: String },
}

impl From<StoreError> for ApplyError {
    /// Every store failure is an infrastructure problem, never the submitter's fault.
    fn from(err: StoreError) -> Self {
        ApplyError::InternalError(err.to_string())
    }
}
