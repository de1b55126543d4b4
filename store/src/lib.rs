//! State access for the tally transaction processors.
//!
//! The external ledger exposes raw byte reads and writes through
//! [`StateContext`]. [`StateStore`] layers the entry codec on top so
//! handlers work with decoded [`tally_types::StateEntry`] values.

pub mod adapter;
pub mod codec;
pub mod context;
pub mod error;

pub use adapter::StateStore;
pub use codec::{decode_entry, encode_entry, AttributeLayout};
pub use context::StateContext;
pub use error::StoreError;
