//! Generic transition engine shared by every family.
//!
//! A [`Workflow`] maps each of its verbs to a pure [`TransitionFn`]. The
//! engine ([`WorkflowHandler`]) runs the fixed pipeline around it:
//! decode → validate → derive address → read → transition → write → confirm.

use crate::handler::TransactionHandler;
use std::marker::PhantomData;
use tally_crypto::AddressDeriver;
use tally_store::{AttributeLayout, StateContext, StateStore};
use tally_transactions::{decode_payload, validate_update};
use tally_types::{
    Address, ApplyError, AttributeValue, DisplayValue, Family, FamilyVerb, TransactionRequest,
    Value, FAMILY_VERSION,
};

/// Input of a transition: the validated update.
#[derive(Clone, Copy, Debug)]
pub struct Transition<'a> {
    pub name: &'a str,
    pub verb: &'static str,
    pub value: &'a Value,
}

/// Computes the next attribute for a name from its current one.
///
/// Must depend on nothing but its arguments.
pub type TransitionFn =
    fn(&Transition<'_>, Option<&AttributeValue>) -> Result<AttributeValue, ApplyError>;

/// A family's verb set and transition table.
pub trait Workflow: 'static {
    type Verb: FamilyVerb;

    /// Name length ceiling, if the family has one.
    const MAX_NAME_LENGTH: Option<usize>;

    fn transition(verb: Self::Verb) -> TransitionFn;
}

/// Rejection for a set-class verb on a name that already has an attribute.
pub(crate) fn already_in_state(transition: &Transition<'_>, existing: &AttributeValue) -> ApplyError {
    ApplyError::invalid(format!(
        "Verb is \"{}\" but Name already in state, Name: {} Value: {}",
        transition.verb, transition.name, existing
    ))
}

/// Rejection for an update-class verb on a name with no attribute.
pub(crate) fn not_in_state(transition: &Transition<'_>) -> ApplyError {
    ApplyError::invalid(format!(
        "Verb is {} but Name is not in state",
        transition.verb
    ))
}

/// Transaction handler for one family, driven by workflow `W`.
pub struct WorkflowHandler<W: Workflow> {
    family: Family,
    versions: Vec<String>,
    namespaces: Vec<String>,
    deriver: AddressDeriver,
    layout: AttributeLayout,
    _workflow: PhantomData<fn() -> W>,
}

impl<W: Workflow> WorkflowHandler<W> {
    pub(crate) fn with_family(family: Family) -> Self {
        let deriver = AddressDeriver::new(family);
        Self {
            family,
            versions: vec![FAMILY_VERSION.to_string()],
            namespaces: vec![deriver.namespace().to_string()],
            deriver,
            layout: AttributeLayout::for_family(family),
            _workflow: PhantomData,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// State address holding `name`.
    pub fn address_of(&self, name: &str) -> Address {
        self.deriver.derive(name)
    }

    /// Current attribute of `name`, decoded with this family's layout.
    pub fn read(
        &self,
        context: &dyn StateContext,
        name: &str,
    ) -> Result<Option<AttributeValue>, ApplyError> {
        let store = StateStore::new(context, self.layout);
        let entry = store.get(&self.address_of(name))?;
        Ok(entry.and_then(|entry| entry.get(name).cloned()))
    }
}

impl<W: Workflow> TransactionHandler for WorkflowHandler<W> {
    fn family_name(&self) -> &str {
        self.family.as_str()
    }

    fn family_versions(&self) -> &[String] {
        &self.versions
    }

    fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    fn apply(&self, request: &TransactionRequest, context: &dyn StateContext) -> Result<(), ApplyError> {
        let update = decode_payload(&request.payload)?;
        let update = validate_update::<W::Verb>(update, W::MAX_NAME_LENGTH)?;

        let address = self.deriver.derive(&update.name);
        let store = StateStore::new(context, self.layout);
        let mut entry = store.get(&address)?.unwrap_or_default();

        let transition = Transition {
            name: &update.name,
            verb: update.verb.as_str(),
            value: &update.value,
        };
        let next = W::transition(update.verb)(&transition, entry.get(&update.name))?;
        entry.insert(update.name.clone(), next);

        let written = store.set(&address, &entry)?;
        if written.is_empty() {
            return Err(ApplyError::internal("State Error!"));
        }

        tracing::info!(
            family = %self.family,
            verb = transition.verb,
            name = %update.name,
            value = %DisplayValue(&update.value),
            %address,
            "applied transaction"
        );
        Ok(())
    }
}
