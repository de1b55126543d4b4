//! Typed get/set over a [`StateContext`].

use crate::codec::{decode_entry, encode_entry, AttributeLayout};
use crate::context::StateContext;
use crate::StoreError;
use std::collections::HashMap;
use tally_types::{Address, StateEntry};

/// Reads and writes [`StateEntry`] values through a raw state context,
/// decoding with one family's layout.
pub struct StateStore<'a> {
    context: &'a dyn StateContext,
    layout: AttributeLayout,
}

impl<'a> StateStore<'a> {
    pub fn new(context: &'a dyn StateContext, layout: AttributeLayout) -> Self {
        Self { context, layout }
    }

    /// Decoded entries for each address that has one.
    pub fn get_many(&self, addresses: &[Address]) -> Result<HashMap<Address, StateEntry>, StoreError> {
        let raw = self.context.get_state(addresses)?;
        raw.into_iter()
            .filter(|(_, bytes)| !bytes.is_empty())
            .map(|(address, bytes)| {
                let entry = decode_entry(&bytes, self.layout).map_err(|e| StoreError::Corruption {
                    address: address.clone(),
                    reason: e.to_string(),
                })?;
                Ok((address, entry))
            })
            .collect()
    }

    /// The entry at `address`, or `None` if nothing (or an empty value) is stored there.
    pub fn get(&self, address: &Address) -> Result<Option<StateEntry>, StoreError> {
        let mut entries = self.get_many(std::slice::from_ref(address))?;
        let entry = entries.remove(address);
        tracing::debug!(%address, found = entry.is_some(), "read state entry");
        Ok(entry)
    }

    /// Encode and write `entry`; returns the addresses the context reports as written.
    pub fn set(&self, address: &Address, entry: &StateEntry) -> Result<Vec<Address>, StoreError> {
        let bytes = encode_entry(entry)?;
        let written = self
            .context
            .set_state(HashMap::from([(address.clone(), bytes)]))?;
        tracing::debug!(%address, written = written.len(), "wrote state entry");
        Ok(written)
    }
}
