//! State address derivation.
//!
//! Address format: `sha512(family)[..6]` + `sha512(name)[64..]`, lowercase hex,
//! 70 characters. The prefix isolates a family's state; the tail spreads names
//! over the family's namespace.

use crate::hash::sha512_hex;
use tally_types::{Address, Family};

/// Namespace prefix owned by a family name.
pub fn namespace_prefix(family_name: &str) -> String {
    let mut digest = sha512_hex(family_name.as_bytes());
    digest.truncate(Address::NAMESPACE_LEN);
    digest
}

/// Address of `name` under `namespace`.
pub fn derive_address(namespace: &str, name: &str) -> Address {
    let digest = sha512_hex(name.as_bytes());
    Address::from_parts(namespace, &digest[digest.len() - Address::TAIL_LEN..])
}

/// Derives addresses for one family. The namespace is hashed once, at construction.
#[derive(Clone, Debug)]
pub struct AddressDeriver {
    family: Family,
    namespace: String,
}

impl AddressDeriver {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            namespace: namespace_prefix(family.as_str()),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn derive(&self, name: &str) -> Address {
        derive_address(&self.namespace, name)
    }
}
