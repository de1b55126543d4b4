//! Nullable infrastructure for deterministic testing.
//!
//! The ledger's state layer is abstracted behind
//! [`tally_store::StateContext`]. This crate provides a test-friendly
//! implementation that:
//! - Keeps state in memory, never touching a validator
//! - Can drop writes or fail outright on request
//! - Counts reads and writes so tests can assert on state access
//!
//! Usage: pass a [`NullContext`] wherever a handler expects a state context.

pub mod store;

pub use store::NullContext;
