//! Stored state: phase tags, attribute values and the per-address entry.

use ciborium::value::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Status recorded for a name as it moves through a registration workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseTag {
    Registered,
    Ready,
    Vote,
    /// Marked invalid. Terminal for the local workflow; the province
    /// workflow still lets update verbs overwrite it.
    Invalid,
}

impl PhaseTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Ready => "ready",
            Self::Vote => "vote",
            Self::Invalid => "invalid",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "registered" => Some(Self::Registered),
            "ready" => Some(Self::Ready),
            "vote" => Some(Self::Vote),
            "invalid" => Some(Self::Invalid),
            _ => None,
        }
    }

    /// Tags that close a name to further ballots and re-registration.
    ///
    /// `vote` is deliberately absent: in the local workflow the text `vote`
    /// is an ordinary ballot, not a tag.
    pub fn is_closing(&self) -> bool {
        matches!(self, Self::Registered | Self::Ready | Self::Invalid)
    }

    /// Read a closing tag out of a submitted value (text only).
    pub fn closing_from_value(value: &Value) -> Option<Self> {
        value
            .as_text()
            .and_then(|text| Self::parse(text))
            .filter(PhaseTag::is_closing)
    }
}

impl fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a name maps to inside a [`StateEntry`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// Workflow phase of the name.
    Phase(PhaseTag),
    /// Value written once by a single-phase registry, kept verbatim.
    Scalar(Value),
    /// Ballots cast for a name before it was tagged, in submission order.
    VoteList(Vec<Vec<u8>>),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phase(tag) => write!(f, "{tag}"),
            Self::Scalar(value) => write!(f, "{}", DisplayValue(value)),
            Self::VoteList(votes) => write!(f, "{} vote(s)", votes.len()),
        }
    }
}

/// Renders a submitted CBOR value for log lines and rejection messages.
pub struct DisplayValue<'a>(pub &'a Value);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i128::from(*i)),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Decoded content of one state address: name → attribute.
///
/// Addresses are derived from a hash tail of the name, so an entry almost
/// always holds a single name. Keying by name keeps colliding names apart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateEntry(BTreeMap<String, AttributeValue>);

impl StateEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Set the attribute for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) -> Option<AttributeValue> {
        self.0.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names in ascending order, the order they are encoded in.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, AttributeValue)> for StateEntry {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_tag_does_not_close() {
        assert!(PhaseTag::Registered.is_closing());
        assert!(PhaseTag::Ready.is_closing());
        assert!(PhaseTag::Invalid.is_closing());
        assert!(!PhaseTag::Vote.is_closing());
    }

    #[test]
    fn closing_tag_from_value() {
        assert_eq!(
            PhaseTag::closing_from_value(&Value::Text("ready".into())),
            Some(PhaseTag::Ready)
        );
        assert_eq!(PhaseTag::closing_from_value(&Value::Text("vote".into())), None);
        assert_eq!(PhaseTag::closing_from_value(&Value::Text("candidate-7".into())), None);
        assert_eq!(PhaseTag::closing_from_value(&Value::Integer(1.into())), None);
    }

    #[test]
    fn display_attribute_values() {
        assert_eq!(AttributeValue::Phase(PhaseTag::Ready).to_string(), "ready");
        assert_eq!(AttributeValue::Scalar(Value::Text("42".into())).to_string(), "42");
        assert_eq!(AttributeValue::Scalar(Value::Integer(7.into())).to_string(), "7");
        assert_eq!(
            AttributeValue::VoteList(vec![b"a".to_vec(), b"b".to_vec()]).to_string(),
            "2 vote(s)"
        );
    }

    #[test]
    fn entry_insert_replaces() {
        let mut entry = StateEntry::new();
        assert!(entry.insert("region1", AttributeValue::Phase(PhaseTag::Registered)).is_none());
        let previous = entry.insert("region1", AttributeValue::Phase(PhaseTag::Ready));
        assert_eq!(previous, Some(AttributeValue::Phase(PhaseTag::Registered)));
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get("region1"), Some(&AttributeValue::Phase(PhaseTag::Ready)));
    }

    #[test]
    fn entry_iterates_in_name_order() {
        let entry: StateEntry = [
            ("b".to_string(), AttributeValue::Phase(PhaseTag::Vote)),
            ("a".to_string(), AttributeValue::Phase(PhaseTag::Ready)),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = entry.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
