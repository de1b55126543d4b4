//! Read/write contract of the external state layer.

use crate::StoreError;
use std::collections::HashMap;
use tally_types::Address;

/// Point-in-time view of ledger state for one transaction.
///
/// Implemented by the validator connection in production and by
/// in-memory contexts in tests. Reads and writes within one transaction are
/// atomic and consistent; implementations do not need extra locking.
pub trait StateContext {
    /// Fetch the raw bytes stored at each address.
    ///
    /// Addresses with no entry are left out of the map. An empty value is
    /// treated the same as a missing one.
    fn get_state(&self, addresses: &[Address]) -> Result<HashMap<Address, Vec<u8>>, StoreError>;

    /// Write raw bytes and return the addresses the store reports as written.
    fn set_state(&self, entries: HashMap<Address, Vec<u8>>) -> Result<Vec<Address>, StoreError>;
}
