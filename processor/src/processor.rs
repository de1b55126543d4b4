//! In-process dispatcher: hands each request to the handler registered for
//! its family name and version.

use crate::ProcessorError;
use tally_handlers::{handler_for, TransactionHandler};
use tally_store::StateContext;
use tally_types::{ApplyError, Family, TransactionRequest};

/// What a handler declares when it registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub family: String,
    pub versions: Vec<String>,
    pub namespaces: Vec<String>,
}

/// Routes transaction requests to registered handlers.
pub struct TransactionProcessor {
    endpoint: String,
    handlers: Vec<Box<dyn TransactionHandler>>,
}

impl TransactionProcessor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            handlers: Vec::new(),
        }
    }

    /// A processor serving one family.
    pub fn for_family(endpoint: impl Into<String>, family: Family) -> Self {
        let mut processor = Self::new(endpoint);
        processor.handlers.push(handler_for(family));
        processor
    }

    /// Register a handler. A family/version pair can only be served once.
    pub fn add_handler(&mut self, handler: Box<dyn TransactionHandler>) -> Result<(), ProcessorError> {
        for version in handler.family_versions() {
            if self.find(handler.family_name(), version).is_some() {
                return Err(ProcessorError::DuplicateHandler {
                    family: handler.family_name().to_string(),
                    version: version.clone(),
                });
            }
        }
        tracing::debug!(
            family = handler.family_name(),
            namespaces = ?handler.namespaces(),
            "registered handler"
        );
        self.handlers.push(handler);
        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.handlers
            .iter()
            .map(|handler| Registration {
                family: handler.family_name().to_string(),
                versions: handler.family_versions().to_vec(),
                namespaces: handler.namespaces().to_vec(),
            })
            .collect()
    }

    /// Apply one request against `context`.
    pub fn process(
        &self,
        request: &TransactionRequest,
        context: &dyn StateContext,
    ) -> Result<(), ProcessorError> {
        let handler = self
            .find(&request.family_name, &request.family_version)
            .ok_or_else(|| ProcessorError::NoHandler {
                family: request.family_name.clone(),
                version: request.family_version.clone(),
            })?;

        handler.apply(request, context).map_err(|err| {
            match &err {
                ApplyError::InvalidTransaction(msg) => tracing::warn!(
                    family = %request.family_name,
                    signer = %request.signer,
                    "rejected transaction: {msg}"
                ),
                ApplyError::InternalError(msg) => tracing::error!(
                    family = %request.family_name,
                    signer = %request.signer,
                    "internal error applying transaction: {msg}"
                ),
            }
            ProcessorError::Apply(err)
        })
    }

    fn find(&self, family: &str, version: &str) -> Option<&dyn TransactionHandler> {
        self.handlers
            .iter()
            .find(|handler| {
                handler.family_name() == family
                    && handler.family_versions().iter().any(|v| v == version)
            })
            .map(|handler| handler.as_ref())
    }
}
