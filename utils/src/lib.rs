//! Shared utilities for the tally transaction processors.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with, LogFormat, UnknownLogFormat};
