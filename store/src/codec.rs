//! Binary encoding of [`StateEntry`] values.
//!
//! An entry is stored as a CBOR map from name to attribute:
//!
//! - `Phase` → the tag as CBOR text
//! - `Scalar` → the submitted CBOR value, verbatim
//! - `VoteList` → CBOR text holding base64(JSON array of base64(ballot))
//!
//! Text is ambiguous on its own (a phase tag and a vote list are both
//! strings), so decoding is driven by the family's [`AttributeLayout`].

use crate::StoreError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ciborium::value::Value;
use tally_types::{AttributeValue, Family, PhaseTag, StateEntry};

/// How stored attribute values are interpreted for a family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeLayout {
    /// Every value is an opaque scalar.
    Scalar,
    /// Closing tags (`registered`, `ready`, `invalid`) or an encoded vote list.
    PhaseOrVotes,
    /// Any phase tag.
    Phase,
}

impl AttributeLayout {
    pub fn for_family(family: Family) -> Self {
        match family {
            Family::LocalVote | Family::ProvinceVote => Self::Scalar,
            Family::LocalDpt => Self::PhaseOrVotes,
            Family::ProvinceDpt => Self::Phase,
        }
    }
}

/// Encode an entry. Names are written in ascending order.
pub fn encode_entry(entry: &StateEntry) -> Result<Vec<u8>, StoreError> {
    let map = entry
        .iter()
        .map(|(name, attribute)| {
            Ok((Value::Text(name.clone()), encode_attribute(attribute)?))
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    let mut bytes = Vec::new();
    ciborium::ser::into_writer(&Value::Map(map), &mut bytes)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(bytes)
}

/// Decode an entry previously written by [`encode_entry`] or by another
/// processor sharing the same layout.
pub fn decode_entry(bytes: &[u8], layout: AttributeLayout) -> Result<StateEntry, StoreError> {
    let mut reader = bytes;
    let value: Value = ciborium::de::from_reader(&mut reader)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    if !reader.is_empty() {
        return Err(StoreError::Serialization(format!(
            "{} unexpected bytes after state entry",
            reader.len()
        )));
    }

    let Value::Map(map) = value else {
        return Err(StoreError::Serialization("state entry is not a map".into()));
    };

    map.into_iter()
        .map(|(key, value)| {
            let name = match key {
                Value::Text(name) => name,
                other => {
                    return Err(StoreError::Serialization(format!(
                        "state entry key is not text: {other:?}"
                    )))
                }
            };
            let attribute = decode_attribute(value, layout)
                .map_err(|reason| StoreError::Serialization(format!("{name}: {reason}")))?;
            Ok((name, attribute))
        })
        .collect()
}

fn encode_attribute(attribute: &AttributeValue) -> Result<Value, StoreError> {
    Ok(match attribute {
        AttributeValue::Phase(tag) => Value::Text(tag.as_str().to_string()),
        AttributeValue::Scalar(value) => value.clone(),
        AttributeValue::VoteList(votes) => Value::Text(encode_vote_list(votes)?),
    })
}

fn decode_attribute(value: Value, layout: AttributeLayout) -> Result<AttributeValue, String> {
    match layout {
        AttributeLayout::Scalar => Ok(AttributeValue::Scalar(value)),
        AttributeLayout::Phase => {
            let text = value.as_text().ok_or("phase tag is not text")?;
            PhaseTag::parse(text)
                .map(AttributeValue::Phase)
                .ok_or_else(|| format!("unknown phase tag {text:?}"))
        }
        AttributeLayout::PhaseOrVotes => {
            let text = value.as_text().ok_or("attribute is not text")?;
            match PhaseTag::parse(text).filter(PhaseTag::is_closing) {
                Some(tag) => Ok(AttributeValue::Phase(tag)),
                None => decode_vote_list(text).map(AttributeValue::VoteList),
            }
        }
    }
}

/// `base64(JSON array of base64(ballot))`, the layout existing ledger data uses.
pub fn encode_vote_list(votes: &[Vec<u8>]) -> Result<String, StoreError> {
    let items: Vec<String> = votes.iter().map(|vote| STANDARD.encode(vote)).collect();
    let json = serde_json::to_string(&items).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

pub fn decode_vote_list(encoded: &str) -> Result<Vec<Vec<u8>>, String> {
    let json = STANDARD
        .decode(encoded)
        .map_err(|e| format!("vote list is not base64: {e}"))?;
    let items: Vec<String> =
        serde_json::from_slice(&json).map_err(|e| format!("vote list is not a JSON array: {e}"))?;
    items
        .iter()
        .map(|item| {
            STANDARD
                .decode(item)
                .map_err(|e| format!("ballot is not base64: {e}"))
        })
        .collect()
}
