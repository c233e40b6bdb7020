// Unit tests for error module
// Tests error serialization and core error conversion

use crate::error::NeoEmbedError;

use embed_core::{EmbedCoreError, FrameError};

use serde_json::Value;

/// **VALUE**: Tests that errors serialize with the variant tag and message.
///
/// **WHY THIS MATTERS**: Errors are logged structurally; a variant that stops
/// serializing hides which layer failed.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[derive(Serialize)]`
/// or changes the `tag`/`content` layout.
#[test]
fn given_config_error_when_serialized_then_contains_variant_and_message() {
    // GIVEN: A config error
    let err = NeoEmbedError::config("'neoOrigin' is required");

    // WHEN: Serializing to JSON
    let json: Value = serde_json::to_value(&err).expect("error should serialize");

    // THEN: Tagged with the variant, data carries the message
    assert_eq!(json["type"], "Config");
    assert_eq!(json["data"]["message"], "'neoOrigin' is required");
    assert!(json["data"]["location"].is_object());
}

/// **VALUE**: Verifies that core errors keep their text when crossing into the shell.
///
/// **WHY THIS MATTERS**: `init()` rejects with this text. Losing the core message
/// leaves hosts with "Core Error" and nothing to act on.
///
/// **BUG THIS CATCHES**: Would catch a `From` impl that drops the source message.
#[test]
fn given_core_error_when_converted_then_message_is_preserved() {
    // GIVEN: A frame error from embed-core
    let core = EmbedCoreError::from(FrameError::subscribe("listener rejected"));
    let core_text = core.to_string();

    // WHEN: Converting
    let err = NeoEmbedError::from(core);

    // THEN: Core variant with the full core text
    match &err {
        NeoEmbedError::Core { message, .. } => assert_eq!(message, &core_text),
        other => panic!("Expected Core variant, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Core Error: "));
    assert!(err.to_string().contains("listener rejected"));
}

#[test]
fn given_dom_error_when_displayed_then_has_prefix_and_location() {
    let err = NeoEmbedError::dom("Document has no body");

    let text = err.to_string();

    assert!(text.starts_with("DOM Error: Document has no body"));
    assert!(text.contains("error.rs"), "Location should point at this test file");
}
