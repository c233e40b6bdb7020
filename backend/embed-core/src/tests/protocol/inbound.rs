use crate::error::ProtocolError;
use crate::protocol::EmbedMessage;

use serde_json::json;

/// **VALUE**: Verifies every inbound wire tag decodes to its variant.
///
/// **WHY THIS MATTERS**: The embedded app speaks these exact strings. A renamed
/// variant silently stops the handshake or drops UI events.
///
/// **BUG THIS CATCHES**: Would catch a typo in any `#[serde(rename)]` attribute.
#[test]
fn given_known_tags_when_decoded_then_map_to_variants() {
    // GIVEN: One payload per tag
    let cases = [
        (json!({"type": "neo_embed_ready"}), EmbedMessage::Ready),
        (json!({"type": "neo_token_expired"}), EmbedMessage::TokenExpired),
        (
            json!({"type": "neo_provisioning_conflict_error"}),
            EmbedMessage::ProvisioningConflictError,
        ),
        (
            json!({"type": "neo_exchange_token_error"}),
            EmbedMessage::ExchangeTokenError,
        ),
        (json!({"type": "neo_backdrop_visible"}), EmbedMessage::BackdropVisible),
        (json!({"type": "neo_backdrop_hidden"}), EmbedMessage::BackdropHidden),
        (
            json!({"type": "neo_route_change", "path": "/people"}),
            EmbedMessage::RouteChange {
                path: String::from("/people"),
            },
        ),
    ];

    for (payload, expected) in cases {
        // WHEN: Decoding
        let message = EmbedMessage::from_value(payload).expect("known tag should decode");

        // THEN: The variant and its tag match
        assert_eq!(message, expected);
        assert!(message.tag().starts_with("neo_"));
    }
}

#[test]
fn given_extra_fields_when_decoded_then_ignored() {
    let message = EmbedMessage::from_value(json!({"type": "neo_embed_ready", "version": 3}))
        .expect("extra fields are tolerated");

    assert_eq!(message, EmbedMessage::Ready);
}

/// **VALUE**: Verifies that anything outside the closed vocabulary is rejected.
///
/// **WHY THIS MATTERS**: The session ignores undecodable payloads. If unknown tags
/// decoded into some default variant, a future NEO message could trigger a handshake step.
///
/// **BUG THIS CATCHES**: Would catch if someone adds `#[serde(other)]` to a variant.
#[test]
fn given_unknown_or_malformed_payloads_when_decoded_then_return_decode_error() {
    // GIVEN: Payloads that are not protocol messages
    let payloads = [
        json!({"type": "neo_unknown"}),
        json!({"type": "neo_navigate", "path": "/x"}),
        json!({"type": "neo_route_change"}),
        json!({"kind": "neo_embed_ready"}),
        json!("neo_embed_ready"),
        json!(null),
    ];

    for payload in payloads {
        // WHEN: Decoding
        let result = EmbedMessage::from_value(payload.clone());

        // THEN: Decode error
        assert!(
            matches!(result, Err(ProtocolError::Decode { .. })),
            "{payload} should not decode"
        );
    }
}
