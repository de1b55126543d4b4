use tally_types::ApplyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be a string of no more than {max} characters")]
    NameTooLong { max: usize },

    #[error("Verb is required")]
    VerbRequired,

    #[error("Value is required")]
    ValueRequired,

    #[error("Verb must be {allowed} not {verb}")]
    UnknownVerb { allowed: &'static str, verb: String },

    /// The payload bytes are not one well-formed CBOR item.
    #[error("{0}")]
    Decoding(String),

    #[error("failed to encode payload: {0}")]
    Encoding(String),
}

impl From<TransactionError> for ApplyError {
    /// Envelope failures are host problems; everything else is the submitter's fault.
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::Decoding(_) | TransactionError::Encoding(_) => {
                ApplyError::InternalError(err.to_string())
            }
            _ => ApplyError::InvalidTransaction(err.to_string()),
        }
    }
}
