use crate::RedactedToken;

/// **VALUE**: Verifies that a minted credential never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: The session logs outbound messages and errors at debug level.
/// A JWT leaking into the browser console hands a live session to anyone reading it.
///
/// **BUG THIS CATCHES**: Would catch if someone replaces the manual `Debug` impl
/// with `#[derive(Debug)]`.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    // GIVEN: A credential
    let token = RedactedToken::new("eyJhbGciOiJIUzI1NiJ9.secret");

    // WHEN: Formatting it both ways
    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    // THEN: Neither output contains the secret
    assert!(!debug.contains("secret"), "Debug must not leak the token");
    assert!(!display.contains("secret"), "Display must not leak the token");
    assert_eq!(token.as_str(), "eyJhbGciOiJIUzI1NiJ9.secret");
    assert_eq!(token.len(), 27);
}

/// **VALUE**: Verifies that direct serialization of a credential is refused.
///
/// **WHY THIS MATTERS**: Only the exchange-token message may expose the raw value.
/// Serializing the wrapper anywhere else is almost certainly a leak.
///
/// **BUG THIS CATCHES**: Would catch if `Serialize` is derived instead of refusing.
#[test]
fn given_token_when_serialized_then_returns_error() {
    // GIVEN: A credential
    let token = RedactedToken::new("jwt-value");

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&token);

    // THEN: Serialization fails with the redaction message
    let err = result.expect_err("RedactedToken must not serialize");
    assert!(
        err.to_string().contains("cannot be serialized"),
        "Error should explain the refusal: {err}"
    );
}

#[test]
fn given_empty_token_when_checked_then_reports_empty() {
    let token = RedactedToken::from(String::new());
    assert!(token.is_empty());
}
