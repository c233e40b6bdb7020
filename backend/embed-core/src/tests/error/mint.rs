use crate::error::MintError;
use crate::error::mint::MINT_FAILED_MESSAGE;

/// **VALUE**: Verifies that a mint failure's own message reaches the host.
///
/// **WHY THIS MATTERS**: The host's backend error ("network down", "403") is the
/// only clue an integrator has when authentication fails.
///
/// **BUG THIS CATCHES**: Would catch if `host_message()` always returns the fallback.
#[test]
fn given_mint_error_with_message_when_reported_then_uses_message() {
    // GIVEN: A described failure
    let error = MintError::new("network down");

    // WHEN/THEN: The host sees the description
    assert_eq!(error.host_message(), "network down");
    assert!(error.to_string().contains("network down"));
}

#[test]
fn given_mint_error_without_message_when_reported_then_uses_fallback() {
    let error = MintError::without_message();

    assert_eq!(error.host_message(), MINT_FAILED_MESSAGE);
    assert!(error.to_string().contains("Failed to mint token"));
}
