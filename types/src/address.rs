//! Ledger state address: a family namespace prefix followed by a name-hash tail.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 70-character lowercase hex state address.
///
/// The first [`Address::NAMESPACE_LEN`] characters identify the family; the
/// remaining [`Address::TAIL_LEN`] characters are taken from the hash of a name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub const NAMESPACE_LEN: usize = 6;
    pub const TAIL_LEN: usize = 64;
    pub const LEN: usize = Self::NAMESPACE_LEN + Self::TAIL_LEN;

    /// Join a namespace prefix and a hash tail.
    ///
    /// Callers are expected to pass hex strings of the right lengths; use
    /// [`Address::is_valid`] when the parts come from outside the crate.
    pub fn from_parts(namespace: &str, tail: &str) -> Self {
        let mut raw = String::with_capacity(namespace.len() + tail.len());
        raw.push_str(namespace);
        raw.push_str(tail);
        Self(raw)
    }

    /// Parse an address string, rejecting anything that is not 70 lowercase hex chars.
    pub fn parse(raw: &str) -> Option<Self> {
        let address = Self(raw.to_string());
        address.is_valid().then_some(address)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The family namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.0[..Self::NAMESPACE_LEN.min(self.0.len())]
    }

    pub fn is_valid(&self) -> bool {
        self.0.len() == Self::LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
