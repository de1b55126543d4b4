//! The handler contract seen by the dispatcher.

use tally_store::StateContext;
use tally_types::{ApplyError, TransactionRequest};

/// Applies transactions for one family.
///
/// The dispatcher picks a handler by family name and version; the
/// namespaces are what the handler may read and write.
pub trait TransactionHandler: Send + Sync {
    fn family_name(&self) -> &str;

    fn family_versions(&self) -> &[String];

    fn namespaces(&self) -> &[String];

    /// Validate `request` and apply it to `context`.
    ///
    /// Nothing is written unless the whole transaction is valid.
    fn apply(&self, request: &TransactionRequest, context: &dyn StateContext) -> Result<(), ApplyError>;
}
