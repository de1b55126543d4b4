//! In-memory state context for tests. Thread-safe, with failure injection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tally_store::{StateContext, StoreError};
use tally_types::Address;

/// How the context answers writes (and reads).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Store everything and confirm every address.
    Normal,
    /// Accept writes but confirm nothing and keep nothing.
    DropWrites,
    /// Fail every call, like a lost validator connection.
    Unavailable,
}

/// An in-memory [`StateContext`] for testing.
/// Thread-safe so concurrent transactions can share one context.
pub struct NullContext {
    state: Mutex<HashMap<Address, Vec<u8>>>,
    mode: Mode,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl NullContext {
    pub fn new() -> Self {
        Self::with_mode(Mode::Normal)
    }

    /// A context whose writes silently do nothing (empty confirmation list).
    pub fn dropping_writes() -> Self {
        Self::with_mode(Mode::DropWrites)
    }

    /// A context where every read and write fails.
    pub fn unavailable() -> Self {
        Self::with_mode(Mode::Unavailable)
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            state: Mutex::new(HashMap::new()),
            mode,
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// Seed raw bytes at an address, bypassing any codec.
    pub fn insert_raw(&self, address: Address, bytes: Vec<u8>) {
        self.state().insert(address, bytes);
    }

    /// Raw bytes currently stored at an address.
    pub fn raw(&self, address: &Address) -> Option<Vec<u8>> {
        self.state().get(address).cloned()
    }

    /// Number of addresses holding a value.
    pub fn len(&self) -> usize {
        self.state().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().is_empty()
    }

    /// Number of `get_state` calls made so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `set_state` calls made so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn state(&self) -> MutexGuard<'_, HashMap<Address, Vec<u8>>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NullContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StateContext for NullContext {
    fn get_state(&self, addresses: &[Address]) -> Result<HashMap<Address, Vec<u8>>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.mode == Mode::Unavailable {
            return Err(StoreError::Context("state context unavailable".into()));
        }
        let state = self.state();
        Ok(addresses
            .iter()
            .filter_map(|address| state.get(address).map(|bytes| (address.clone(), bytes.clone())))
            .collect())
    }

    fn set_state(&self, entries: HashMap<Address, Vec<u8>>) -> Result<Vec<Address>, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            Mode::Unavailable => Err(StoreError::Context("state context unavailable".into())),
            Mode::DropWrites => Ok(Vec::new()),
            Mode::Normal => {
                let mut state = self.state();
                let mut written: Vec<Address> = entries.keys().cloned().collect();
                written.sort();
                state.extend(entries);
                Ok(written)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(fill: char) -> Address {
        Address::from_parts("123456", &fill.to_string().repeat(64))
    }

    #[test]
    fn test_set_get_state() {
        let context = NullContext::new();
        let written = context
            .set_state(HashMap::from([(test_address('a'), b"data".to_vec())]))
            .unwrap();
        assert_eq!(written, vec![test_address('a')]);
        let read = context.get_state(&[test_address('a')]).unwrap();
        assert_eq!(read.get(&test_address('a')).unwrap(), b"data");
    }

    #[test]
    fn test_absent_address_not_returned() {
        let context = NullContext::new();
        assert!(context.get_state(&[test_address('b')]).unwrap().is_empty());
    }

    #[test]
    fn test_dropping_writes_confirms_nothing() {
        let context = NullContext::dropping_writes();
        let written = context
            .set_state(HashMap::from([(test_address('c'), b"data".to_vec())]))
            .unwrap();
        assert!(written.is_empty());
        assert!(context.is_empty());
    }

    #[test]
    fn test_unavailable_fails_everything() {
        let context = NullContext::unavailable();
        assert!(context.get_state(&[test_address('d')]).is_err());
        assert!(context.set_state(HashMap::new()).is_err());
    }

    #[test]
    fn test_counts_calls() {
        let context = NullContext::new();
        context.get_state(&[]).unwrap();
        context.get_state(&[]).unwrap();
        context.set_state(HashMap::new()).unwrap();
        assert_eq!(context.read_count(), 2);
        assert_eq!(context.write_count(), 1);
    }

    #[test]
    fn test_insert_raw_is_readable() {
        let context = NullContext::new();
        context.insert_raw(test_address('e'), vec![1, 2, 3]);
        assert_eq!(context.raw(&test_address('e')), Some(vec![1, 2, 3]));
        assert_eq!(context.len(), 1);
    }
}
