//! Transaction processor runtime pieces.
//!
//! The validator connection is external; this crate owns what sits behind
//! it: handler registration, routing by family name and version, and the
//! process configuration.

pub mod config;
pub mod error;
pub mod processor;

pub use config::ProcessorConfig;
pub use error::ProcessorError;
pub use processor::{Registration, TransactionProcessor};
