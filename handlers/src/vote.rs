//! Single-phase vote registry: each name is set exactly once.

use crate::engine::{already_in_state, Transition, TransitionFn, Workflow, WorkflowHandler};
use tally_transactions::MAX_NAME_LENGTH;
use tally_types::{ApplyError, AttributeValue, Family, VoteVerb};

pub struct VoteWorkflow;

impl Workflow for VoteWorkflow {
    type Verb = VoteVerb;

    const MAX_NAME_LENGTH: Option<usize> = Some(MAX_NAME_LENGTH);

    fn transition(verb: VoteVerb) -> TransitionFn {
        match verb {
            VoteVerb::Set => apply_set,
        }
    }
}

pub type VoteHandler = WorkflowHandler<VoteWorkflow>;

impl WorkflowHandler<VoteWorkflow> {
    /// Handler for the `localVote` family.
    pub fn local() -> Self {
        Self::with_family(Family::LocalVote)
    }

    /// Handler for the `provinceVote` family.
    pub fn province() -> Self {
        Self::with_family(Family::ProvinceVote)
    }
}

fn apply_set(
    transition: &Transition<'_>,
    current: Option<&AttributeValue>,
) -> Result<AttributeValue, ApplyError> {
    if let Some(existing) = current {
        return Err(already_in_state(transition, existing));
    }
    Ok(AttributeValue::Scalar(transition.value.clone()))
}
