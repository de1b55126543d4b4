//! Update payload wire format.
//!
//! A payload is a CBOR map with text keys `Name`, `Verb` and `Value`. Fields
//! are kept as raw CBOR values here; [`crate::validation`] decides whether
//! they are acceptable.

use crate::error::TransactionError;
use ciborium::value::Value;

pub const NAME_KEY: &str = "Name";
pub const VERB_KEY: &str = "Verb";
pub const VALUE_KEY: &str = "Value";

/// A decoded, not yet validated, update request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    pub name: Option<Value>,
    pub verb: Option<Value>,
    pub value: Option<Value>,
}

impl Update {
    /// Build a well-formed update, mostly for clients and tests.
    pub fn new(name: &str, verb: &str, value: impl Into<Value>) -> Self {
        Self {
            name: Some(Value::Text(name.to_string())),
            verb: Some(Value::Text(verb.to_string())),
            value: Some(value.into()),
        }
    }

    fn to_value(&self) -> Value {
        let fields = [
            (NAME_KEY, &self.name),
            (VERB_KEY, &self.verb),
            (VALUE_KEY, &self.value),
        ];
        Value::Map(
            fields
                .into_iter()
                .filter_map(|(key, field)| {
                    field
                        .as_ref()
                        .map(|v| (Value::Text(key.to_string()), v.clone()))
                })
                .collect(),
        )
    }
}

/// Decode a payload. Unknown keys are ignored; on duplicate keys the last one wins.
///
/// A well-formed value that is not a map decodes to an empty update, which
/// validation then rejects for its missing fields. Bytes left over after the
/// first CBOR item make the payload malformed.
pub fn decode_payload(bytes: &[u8]) -> Result<Update, TransactionError> {
    let mut reader = bytes;
    let value: Value = ciborium::de::from_reader(&mut reader)
        .map_err(|e| TransactionError::Decoding(e.to_string()))?;
    if !reader.is_empty() {
        return Err(TransactionError::Decoding(format!(
            "{} unexpected bytes after payload",
            reader.len()
        )));
    }

    let Value::Map(entries) = value else {
        return Ok(Update::default());
    };

    let mut update = Update::default();
    for (key, field) in entries {
        match key.as_text() {
            Some(NAME_KEY) => update.name = Some(field),
            Some(VERB_KEY) => update.verb = Some(field),
            Some(VALUE_KEY) => update.value = Some(field),
            _ => {}
        }
    }
    Ok(update)
}

/// Encode an update the way clients submit it. Absent fields are omitted.
pub fn encode_payload(update: &Update) -> Result<Vec<u8>, TransactionError> {
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(&update.to_value(), &mut bytes)
        .map_err(|e| TransactionError::Encoding(e.to_string()))?;
    Ok(bytes)
}
