use crate::protocol::HostMessage;

use common::RedactedToken;

use serde_json::json;

/// **VALUE**: Verifies the exact navigate wire shape.
///
/// **WHY THIS MATTERS**: The embedded app routes on `{type, path}` only.
///
/// **BUG THIS CATCHES**: Would catch a renamed tag or an extra field.
#[test]
fn given_navigate_when_serialized_then_matches_wire_shape() {
    // GIVEN: A navigate message
    let message = HostMessage::navigate("/settings");

    // WHEN: Serializing
    let value = serde_json::to_value(&message).expect("navigate serializes");

    // THEN: Exact wire shape
    assert_eq!(value, json!({"type": "neo_navigate", "path": "/settings"}));
}

/// **VALUE**: Verifies that the exchange message exposes the JWT and camelCases the redirect.
///
/// **WHY THIS MATTERS**: This is the one place the credential leaves its redacted
/// wrapper. If the value is missing the embed cannot authenticate; if the key is
/// `redirect_to` the initial route is ignored.
///
/// **BUG THIS CATCHES**: Would catch if `serialize_with` is dropped (the wrapper
/// refuses serialization) or the `redirectTo` rename is lost.
#[test]
fn given_exchange_with_redirect_when_serialized_then_includes_jwt_and_redirect_to() {
    // GIVEN: A minted token and a redirect
    let token = RedactedToken::new("header.payload.sig");
    let message = HostMessage::exchange_token(&token, Some("/people"));

    // WHEN: Serializing
    let value = serde_json::to_value(&message).expect("exchange serializes");

    // THEN: Raw token and camelCase redirect
    assert_eq!(
        value,
        json!({"type": "neo_exchange_token", "jwt": "header.payload.sig", "redirectTo": "/people"})
    );
}

#[test]
fn given_exchange_without_redirect_when_serialized_then_omits_redirect_key() {
    let token = RedactedToken::new("header.payload.sig");
    let message = HostMessage::exchange_token(&token, None);

    let value = serde_json::to_value(&message).expect("exchange serializes");

    assert_eq!(
        value,
        json!({"type": "neo_exchange_token", "jwt": "header.payload.sig"})
    );
}

#[test]
fn given_exchange_message_when_debug_formatted_then_token_is_redacted() {
    let token = RedactedToken::new("header.payload.sig");
    let message = HostMessage::exchange_token(&token, None);

    let debug = format!("{:?}", message);

    assert!(!debug.contains("payload"), "Debug output leaked the token: {debug}");
    assert_eq!(message.tag(), "neo_exchange_token");
}
