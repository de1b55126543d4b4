//! Province workflow: `registered` creates a name, `ready`/`vote`/`invalid`
//! overwrite its phase.
//!
//! Update verbs only require that the name exists. An `invalid` name can
//! still be moved to another phase by a later update.

use crate::engine::{already_in_state, not_in_state, Transition, TransitionFn, Workflow, WorkflowHandler};
use tally_types::{ApplyError, AttributeValue, Family, PhaseTag, ProvinceDptVerb};

pub struct ProvinceDptWorkflow;

impl Workflow for ProvinceDptWorkflow {
    type Verb = ProvinceDptVerb;

    const MAX_NAME_LENGTH: Option<usize> = None;

    fn transition(verb: ProvinceDptVerb) -> TransitionFn {
        match verb {
            ProvinceDptVerb::Registered => apply_registered,
            ProvinceDptVerb::Ready => apply_ready,
            ProvinceDptVerb::Vote => apply_vote,
            ProvinceDptVerb::Invalid => apply_invalid,
        }
    }
}

pub type ProvinceDptHandler = WorkflowHandler<ProvinceDptWorkflow>;

impl WorkflowHandler<ProvinceDptWorkflow> {
    pub fn new() -> Self {
        Self::with_family(Family::ProvinceDpt)
    }
}

impl Default for WorkflowHandler<ProvinceDptWorkflow> {
    fn default() -> Self {
        Self::new()
    }
}

/// The submitted value is not stored; the tag is always `registered`.
fn apply_registered(
    transition: &Transition<'_>,
    current: Option<&AttributeValue>,
) -> Result<AttributeValue, ApplyError> {
    match current {
        Some(existing) => Err(already_in_state(transition, existing)),
        None => Ok(AttributeValue::Phase(PhaseTag::Registered)),
    }
}

fn apply_ready(
    transition: &Transition<'_>,
    current: Option<&AttributeValue>,
) -> Result<AttributeValue, ApplyError> {
    advance(transition, current, PhaseTag::Ready)
}

fn apply_vote(
    transition: &Transition<'_>,
    current: Option<&AttributeValue>,
) -> Result<AttributeValue, ApplyError> {
    advance(transition, current, PhaseTag::Vote)
}

fn apply_invalid(
    transition: &Transition<'_>,
    current: Option<&AttributeValue>,
) -> Result<AttributeValue, ApplyError> {
    advance(transition, current, PhaseTag::Invalid)
}

fn advance(
    transition: &Transition<'_>,
    current: Option<&AttributeValue>,
    tag: PhaseTag,
) -> Result<AttributeValue, ApplyError> {
    match current {
        Some(_) => Ok(AttributeValue::Phase(tag)),
        None => Err(not_in_state(transition)),
    }
}
