use crate::error::{EmbedError, EmbedErrorKind, MintError};

use serde_json::json;

/// **VALUE**: Verifies the error record shape handed to the host's `error` callback.
///
/// **WHY THIS MATTERS**: Hosts switch on `error.type`. The strings are public API
/// already parsed by host integrations; changing them breaks every one of them.
///
/// **BUG THIS CATCHES**: Would catch if `rename_all = "snake_case"` or the
/// `type` rename is removed.
#[test]
fn given_error_records_when_serialized_then_use_public_type_strings() {
    // GIVEN: One record per kind
    let cases = [
        (EmbedError::token_exchange(), "token_exchange_error"),
        (EmbedError::provisioning_conflict(), "provisioning_conflict_error"),
        (
            EmbedError::mint(&MintError::new("network down")),
            "mint_error",
        ),
        (EmbedError::new(EmbedErrorKind::Unknown, "?"), "unknown"),
    ];

    for (error, expected_type) in cases {
        // WHEN: Serializing
        let value = serde_json::to_value(&error).expect("error record serializes");

        // THEN: `type` carries the public string and matches as_str()
        assert_eq!(value["type"], json!(expected_type));
        assert_eq!(error.kind.as_str(), expected_type);
        assert_eq!(value["message"], json!(error.message));
    }
}

#[test]
fn given_protocol_errors_when_built_then_carry_fixed_messages() {
    assert_eq!(
        EmbedError::provisioning_conflict().message,
        "Failed to provision user"
    );
    assert_eq!(
        EmbedError::token_exchange().message,
        "Failed to exchange token with NEO platform"
    );
}

#[test]
fn given_error_record_when_displayed_then_shows_kind_and_message() {
    let error = EmbedError::token_exchange();

    assert_eq!(
        error.to_string(),
        "token_exchange_error: Failed to exchange token with NEO platform"
    );
}
