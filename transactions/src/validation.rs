//! Update validation.
//!
//! Checks run in a fixed order and stop at the first failure. Nothing here
//! touches state.

use crate::error::TransactionError;
use crate::payload::Update;
use ciborium::value::Value;
use tally_types::FamilyVerb;

/// Longest name accepted by the single-phase registries.
pub const MAX_NAME_LENGTH: usize = 20;

/// An update that passed validation for verb set `V`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedUpdate<V> {
    pub name: String,
    pub verb: V,
    pub value: Value,
}

/// Validate a decoded update.
///
/// `max_name_length` is counted in UTF-16 code units, matching how clients
/// measure names.
pub fn validate_update<V: FamilyVerb>(
    update: Update,
    max_name_length: Option<usize>,
) -> Result<ValidatedUpdate<V>, TransactionError> {
    let name = match update.name {
        Some(Value::Text(name)) if !name.is_empty() => name,
        _ => return Err(TransactionError::NameRequired),
    };

    if let Some(max) = max_name_length {
        if name.encode_utf16().count() > max {
            return Err(TransactionError::NameTooLong { max });
        }
    }

    let verb = match update.verb {
        Some(Value::Text(verb)) if !verb.is_empty() => verb,
        _ => return Err(TransactionError::VerbRequired),
    };

    let value = match update.value {
        Some(value) if !value.is_null() => value,
        _ => return Err(TransactionError::ValueRequired),
    };

    let verb = V::parse(&verb).ok_or(TransactionError::UnknownVerb {
        allowed: V::ALLOWED,
        verb,
    })?;

    Ok(ValidatedUpdate { name, verb, value })
}
