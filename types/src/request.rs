//! Inbound transaction request as delivered by the validator.

use serde::{Deserialize, Serialize};

/// A transaction routed to a handler: header fields the handler needs plus
/// the raw payload. Signature checks have already been done upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub family_name: String,
    pub family_version: String,
    /// Public key of the signer, hex encoded. Only used for logging.
    pub signer: String,
    /// CBOR-encoded update.
    pub payload: Vec<u8>,
}

impl TransactionRequest {
    pub fn new(family_name: impl Into<String>, family_version: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            family_name: family_name.into(),
            family_version: family_version.into(),
            signer: String::new(),
            payload,
        }
    }

    pub fn with_signer(mut self, signer: impl Into<String>) -> Self {
        self.signer = signer.into();
        self
    }
}
