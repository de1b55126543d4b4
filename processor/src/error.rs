use tally_types::{ApplyError, UnknownFamily};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    UnknownFamily(#[from] UnknownFamily),

    #[error("no handler registered for family {family} version {version}")]
    NoHandler { family: String, version: String },

    #[error("a handler for family {family} version {version} is already registered")]
    DuplicateHandler { family: String, version: String },

    #[error(transparent)]
    Apply(#[from] ApplyError),

    #[error("config error: {0}")]
    Config(String),
}
