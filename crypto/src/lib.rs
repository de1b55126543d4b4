//! Hashing and address derivation for the tally transaction processors.
//!
//! - **SHA-512** hex digests for namespaces and address tails
//! - Address derivation: family namespace prefix + name hash tail

pub mod address;
pub mod hash;

pub use address::{derive_address, namespace_prefix, AddressDeriver};
pub use hash::sha512_hex;
