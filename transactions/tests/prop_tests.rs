use proptest::prelude::*;
use tally_transactions::{
    decode_payload, encode_payload, validate_update, TransactionError, Update, MAX_NAME_LENGTH,
};
use tally_types::{ProvinceDptVerb, VoteVerb};

proptest! {
    #[test]
    fn decoded_payload_matches_encoded_update(
        name in "[a-z0-9]{1,30}",
        value in ".{0,40}",
    ) {
        let update = Update::new(&name, "set", value.as_str());
        let bytes = encode_payload(&update).unwrap();
        prop_assert_eq!(decode_payload(&bytes).unwrap(), update);
    }

    #[test]
    fn vote_names_over_the_limit_are_rejected(name in "[a-z]{21,40}") {
        let err = validate_update::<VoteVerb>(Update::new(&name, "set", "1"), Some(MAX_NAME_LENGTH))
            .unwrap_err();
        prop_assert_eq!(err, TransactionError::NameTooLong { max: MAX_NAME_LENGTH });
    }

    #[test]
    fn unlimited_families_accept_long_names(name in "[a-z]{1,200}") {
        let validated =
            validate_update::<ProvinceDptVerb>(Update::new(&name, "registered", "x"), None).unwrap();
        prop_assert_eq!(validated.name, name);
    }

    #[test]
    fn unknown_verbs_name_the_allowed_set(verb in "[a-z]{1,12}") {
        prop_assume!(verb != "set");
        let err = validate_update::<VoteVerb>(Update::new("alice", &verb, "1"), Some(MAX_NAME_LENGTH))
            .unwrap_err();
        prop_assert_eq!(err.to_string(), format!("Verb must be set not {verb}"));
    }
}
