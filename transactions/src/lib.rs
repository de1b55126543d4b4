//! Update payloads and their validation.
//!
//! - [`payload`]: CBOR wire format of `{Name, Verb, Value}` updates
//! - [`validation`]: required fields, name length and verb membership checks

pub mod error;
pub mod payload;
pub mod validation;

pub use error::TransactionError;
pub use payload::{decode_payload, encode_payload, Update};
pub use validation::{validate_update, ValidatedUpdate, MAX_NAME_LENGTH};
