//! Fundamental types for the tally transaction processors.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: state addresses, family and verb identifiers, stored attribute
//! values, inbound requests and the handler error type.

pub mod address;
pub mod error;
pub mod family;
pub mod request;
pub mod state;
pub mod verb;

pub use address::Address;
pub use error::{ApplyError, UnknownFamily};
pub use family::{Family, FAMILY_VERSION};
pub use request::TransactionRequest;
pub use state::{AttributeValue, DisplayValue, PhaseTag, StateEntry};
pub use verb::{FamilyVerb, LocalDptVerb, ProvinceDptVerb, VoteVerb};

/// Re-exported so downstream crates name the same CBOR value type.
pub use ciborium::value::Value;
