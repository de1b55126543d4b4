//! Local workflow: collect ballots for a name until it is closed by a tag.
//!
//! Both verbs share one rule, driven by the submitted value:
//!
//! - a closing tag (`registered`, `ready`, `invalid`) is written only on a
//!   name with no attribute yet;
//! - any other value is a ballot, appended to the name's vote list unless
//!   the name is already tagged.

use crate::engine::{already_in_state, Transition, TransitionFn, Workflow, WorkflowHandler};
use tally_types::{ApplyError, AttributeValue, Family, LocalDptVerb, PhaseTag, Value};

pub struct LocalDptWorkflow;

impl Workflow for LocalDptWorkflow {
    type Verb = LocalDptVerb;

    const MAX_NAME_LENGTH: Option<usize> = None;

    fn transition(verb: LocalDptVerb) -> TransitionFn {
        match verb {
            LocalDptVerb::Ready | LocalDptVerb::Vote => apply_ballot,
        }
    }
}

pub type LocalDptHandler = WorkflowHandler<LocalDptWorkflow>;

impl WorkflowHandler<LocalDptWorkflow> {
    pub fn new() -> Self {
        Self::with_family(Family::LocalDpt)
    }
}

impl Default for WorkflowHandler<LocalDptWorkflow> {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_ballot(
    transition: &Transition<'_>,
    current: Option<&AttributeValue>,
) -> Result<AttributeValue, ApplyError> {
    if let Some(tag) = PhaseTag::closing_from_value(transition.value) {
        return match current {
            Some(existing) => Err(already_in_state(transition, existing)),
            None => Ok(AttributeValue::Phase(tag)),
        };
    }

    let ballot = ballot_bytes(transition.value)?;
    match current {
        None => Ok(AttributeValue::VoteList(vec![ballot])),
        Some(AttributeValue::VoteList(votes)) => {
            let mut votes = votes.clone();
            votes.push(ballot);
            Ok(AttributeValue::VoteList(votes))
        }
        Some(existing @ AttributeValue::Phase(_)) => Err(already_in_state(transition, existing)),
        Some(AttributeValue::Scalar(_)) => Err(ApplyError::internal(format!(
            "unexpected scalar stored for {}",
            transition.name
        ))),
    }
}

/// Bytes recorded for one ballot: the value's text form. Byte strings are
/// read as UTF-8, with invalid sequences replaced by U+FFFD, as existing
/// ledger data records them.
fn ballot_bytes(value: &Value) -> Result<Vec<u8>, ApplyError> {
    match value {
        Value::Text(text) => Ok(text.as_bytes().to_vec()),
        Value::Bytes(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned().into_bytes()),
        Value::Integer(i) => Ok(i128::from(*i).to_string().into_bytes()),
        Value::Float(x) => Ok(x.to_string().into_bytes()),
        Value::Bool(b) => Ok(b.to_string().into_bytes()),
        _ => Err(ApplyError::invalid(
            "Value must be a string, bytes, number or boolean",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::FamilyVerb;

    fn run(
        verb: LocalDptVerb,
        value: Value,
        current: Option<&AttributeValue>,
    ) -> Result<AttributeValue, ApplyError> {
        let transition = Transition {
            name: "ward7",
            verb: verb.as_str(),
            value: &value,
        };
        LocalDptWorkflow::transition(verb)(&transition, current)
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn first_ballot_creates_list() {
        assert_eq!(
            run(LocalDptVerb::Vote, text("candidate-1"), None).unwrap(),
            AttributeValue::VoteList(vec![b"candidate-1".to_vec()])
        );
    }

    #[test]
    fn ballots_append_in_order() {
        let current = AttributeValue::VoteList(vec![b"a".to_vec()]);
        assert_eq!(
            run(LocalDptVerb::Vote, text("b"), Some(&current)).unwrap(),
            AttributeValue::VoteList(vec![b"a".to_vec(), b"b".to_vec()])
        );
    }

    #[test]
    fn ready_verb_with_ballot_value_appends() {
        let current = AttributeValue::VoteList(vec![b"a".to_vec()]);
        assert_eq!(
            run(LocalDptVerb::Ready, text("c"), Some(&current)).unwrap(),
            AttributeValue::VoteList(vec![b"a".to_vec(), b"c".to_vec()])
        );
    }

    #[test]
    fn vote_text_is_a_ballot_not_a_tag() {
        assert_eq!(
            run(LocalDptVerb::Vote, text("vote"), None).unwrap(),
            AttributeValue::VoteList(vec![b"vote".to_vec()])
        );
    }

    #[test]
    fn closing_tag_on_fresh_name() {
        for tag in ["registered", "ready", "invalid"] {
            assert_eq!(
                run(LocalDptVerb::Ready, text(tag), None).unwrap(),
                AttributeValue::Phase(PhaseTag::parse(tag).unwrap())
            );
        }
    }

    #[test]
    fn closing_tag_on_existing_name_is_rejected() {
        let current = AttributeValue::VoteList(vec![b"a".to_vec()]);
        let err = run(LocalDptVerb::Ready, text("ready"), Some(&current)).unwrap_err();
        assert!(err.is_invalid_transaction());
        assert!(err.message().contains("already in state"));
    }

    #[test]
    fn ballot_after_tag_is_rejected() {
        let current = AttributeValue::Phase(PhaseTag::Ready);
        let err = run(LocalDptVerb::Vote, text("late"), Some(&current)).unwrap_err();
        assert_eq!(
            err.message(),
            "Verb is \"vote\" but Name already in state, Name: ward7 Value: ready"
        );
    }

    #[test]
    fn numeric_ballots_are_recorded_as_text() {
        assert_eq!(
            run(LocalDptVerb::Vote, Value::Integer(42.into()), None).unwrap(),
            AttributeValue::VoteList(vec![b"42".to_vec()])
        );
        assert_eq!(
            run(LocalDptVerb::Vote, Value::Bool(true), None).unwrap(),
            AttributeValue::VoteList(vec![b"true".to_vec()])
        );
    }

    #[test]
    fn byte_string_ballots_are_recorded_as_utf8_text() {
        assert_eq!(
            run(LocalDptVerb::Vote, Value::Bytes(b"c1".to_vec()), None).unwrap(),
            AttributeValue::VoteList(vec![b"c1".to_vec()])
        );
        assert_eq!(
            run(LocalDptVerb::Vote, Value::Bytes(vec![b'a', 0xff]), None).unwrap(),
            AttributeValue::VoteList(vec!["a\u{fffd}".as_bytes().to_vec()])
        );
    }

    #[test]
    fn compound_ballots_are_rejected() {
        let err = run(LocalDptVerb::Vote, Value::Array(vec![text("a")]), None).unwrap_err();
        assert!(err.is_invalid_transaction());
    }
}
