use crate::helpers::{Harness, MockMinter, NEO_ORIGIN, message};

use embed_core::{EmbedSettings, Lifecycle};

use serde_json::json;

/// **VALUE**: Verifies the complete first handshake: ready → mint → exchange → authenticated.
///
/// **WHY THIS MATTERS**: This is the only path that signs a user into the embedded
/// app. If any step is skipped the host page shows a frame stuck on the boot screen.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The lifecycle flag is not flipped on first ready
/// - The redirect path is not attached to the first exchange
/// - The exchange is posted to a wildcard or wrong origin
/// - `authenticated` fires before the exchange is posted, or not at all
#[tokio::test]
async fn given_uninitialized_session_when_ready_then_exchanges_token_with_redirect() {
    // GIVEN: A started session with redirect "/people"
    let harness = Harness::started();
    assert_eq!(harness.session.lifecycle(), Lifecycle::Uninitialized);

    // WHEN: The frame signals ready and the exchange completes
    harness.deliver(message("neo_embed_ready"));

    // THEN: Ready fired synchronously, before any minting
    assert!(harness.session.is_initialized(), "Ready should flip lifecycle");
    assert_eq!(harness.events(), vec!["ready"]);
    assert_eq!(harness.host.pending_tasks(), 1, "One exchange should be spawned");

    harness.settle().await;

    // THEN: Exactly one exchange carrying the redirect, scoped to the origin
    let posts = harness.frame.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].0,
        json!({"type": "neo_exchange_token", "jwt": "jwt-1", "redirectTo": "/people"})
    );
    assert_eq!(posts[0].1, NEO_ORIGIN);

    // AND: Authenticated followed the exchange
    assert_eq!(harness.events(), vec!["ready", "authenticated"]);
    assert_eq!(harness.minter.calls(), 1);
}

/// **VALUE**: Verifies that duplicate ready signals are ignored.
///
/// **WHY THIS MATTERS**: The embedded app re-sends ready on reloads. Re-running the
/// initial exchange would redirect the user back to the initial route mid-session.
///
/// **BUG THIS CATCHES**: Would catch if the ready branch stops checking the lifecycle.
#[tokio::test]
async fn given_ready_session_when_second_ready_then_no_callbacks_and_no_posts() {
    // GIVEN: A session that completed the handshake
    let harness = Harness::started();
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;
    let events_before = harness.events();
    let posts_before = harness.frame.posts().len();

    // WHEN: A second ready arrives
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;

    // THEN: Nothing happens
    assert_eq!(harness.events(), events_before);
    assert_eq!(harness.frame.posts().len(), posts_before);
    assert_eq!(harness.minter.calls(), 1, "No second mint");
}

/// **VALUE**: Verifies the silent refresh after the embedded app reports token expiry.
///
/// **WHY THIS MATTERS**: A refresh must not carry the redirect (it would navigate the
/// user away) and must not fire `authenticated` (hosts use it for one-time setup).
///
/// **BUG THIS CATCHES**: Would catch if refresh reuses the initial-exchange path.
#[tokio::test]
async fn given_ready_session_when_token_expired_then_refreshes_without_redirect() {
    // GIVEN: An authenticated session
    let harness = Harness::started();
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;

    // WHEN: The token expires
    harness.deliver(message("neo_token_expired"));
    harness.settle().await;

    // THEN: token_expiring fired, then one exchange without redirect
    assert_eq!(
        harness.events(),
        vec!["ready", "authenticated", "token_expiring"]
    );
    let exchanges = harness.frame.exchange_posts();
    assert_eq!(exchanges.len(), 2);
    assert_eq!(
        exchanges[1],
        json!({"type": "neo_exchange_token", "jwt": "jwt-2"})
    );
    assert!(harness.session.is_initialized());
}

/// **VALUE**: Verifies that token-expired refreshes even before the first ready.
///
/// **WHY THIS MATTERS**: The refresh path is independent of the lifecycle; gating it
/// on `Ready` would strand an embed whose ready message was lost.
///
/// **BUG THIS CATCHES**: Would catch an added lifecycle guard on the refresh branch.
#[tokio::test]
async fn given_uninitialized_session_when_token_expired_then_refreshes_without_state_change() {
    // GIVEN: A started, uninitialized session
    let harness = Harness::started();

    // WHEN: Token-expired arrives first
    harness.deliver(message("neo_token_expired"));
    harness.settle().await;

    // THEN: One refresh, no redirect, lifecycle untouched
    assert_eq!(harness.events(), vec!["token_expiring"]);
    assert_eq!(
        harness.frame.exchange_posts(),
        vec![json!({"type": "neo_exchange_token", "jwt": "jwt-1"})]
    );
    assert_eq!(harness.session.lifecycle(), Lifecycle::Uninitialized);
}

/// **VALUE**: Verifies that a mint failure is reported once and nothing is posted.
///
/// **WHY THIS MATTERS**: The host's backend being down is the most common
/// integration failure. The host must hear about it with the minter's message,
/// and the frame must never receive an exchange without a token.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The mint error is swallowed or its message replaced
/// - An exchange is posted after a failed mint
/// - `authenticated` fires despite the failure
#[tokio::test]
async fn given_failing_minter_when_ready_then_reports_mint_error_and_posts_nothing() {
    // GIVEN: A minter that fails with "network down"
    let harness = Harness::started_with(
        EmbedSettings::new(NEO_ORIGIN).with_redirect("/people"),
        MockMinter::failing("network down"),
    );

    // WHEN: The handshake runs
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;

    // THEN: One mint_error with the minter's message, no posts
    assert_eq!(
        harness.events(),
        vec!["ready", "error:mint_error:network down"]
    );
    assert!(harness.frame.posts().is_empty());
    assert!(
        harness.session.is_initialized(),
        "Lifecycle stays ready; the next token-expired retries"
    );
}

#[tokio::test]
async fn given_minter_failing_without_message_when_refreshing_then_reports_fallback() {
    let harness = Harness::started_with(
        EmbedSettings::new(NEO_ORIGIN),
        MockMinter::failing_without_message(),
    );

    harness.deliver(message("neo_token_expired"));
    harness.settle().await;

    assert_eq!(
        harness.events(),
        vec!["token_expiring", "error:mint_error:Failed to mint token"]
    );
    assert!(harness.frame.posts().is_empty());
}

/// **VALUE**: Verifies that `authenticated` fires on the initial exchange even with no redirect.
///
/// **WHY THIS MATTERS**: Redirect is optional; authentication is not.
///
/// **BUG THIS CATCHES**: Would catch if `authenticated` is tied to the redirect
/// being present rather than to the initial exchange.
#[tokio::test]
async fn given_no_redirect_configured_when_ready_then_exchange_omits_redirect_and_authenticates() {
    // GIVEN: Settings without redirect
    let harness = Harness::started_with(EmbedSettings::new(NEO_ORIGIN), MockMinter::succeeding());

    // WHEN: Handshake
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;

    // THEN: No redirectTo key, authenticated fired
    assert_eq!(
        harness.frame.exchange_posts(),
        vec![json!({"type": "neo_exchange_token", "jwt": "jwt-1"})]
    );
    assert_eq!(harness.events(), vec!["ready", "authenticated"]);
}

#[tokio::test]
async fn given_empty_redirect_when_ready_then_redirect_is_omitted() {
    let harness = Harness::started_with(
        EmbedSettings::new(NEO_ORIGIN).with_redirect(""),
        MockMinter::succeeding(),
    );

    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;

    assert_eq!(
        harness.frame.exchange_posts(),
        vec![json!({"type": "neo_exchange_token", "jwt": "jwt-1"})]
    );
}

/// **VALUE**: Documents that overlapping exchanges are not serialized.
///
/// **WHY THIS MATTERS**: A ready immediately followed by token-expired mints twice
/// and posts twice. Hosts relying on one mint per handshake must know this.
///
/// **BUG THIS CATCHES**: Would catch an accidental single-flight guard that drops
/// the refresh (changing observable behavior).
#[tokio::test]
async fn given_ready_then_token_expired_before_mint_completes_then_both_exchanges_post() {
    // GIVEN: A started session
    let harness = Harness::started();

    // WHEN: Two exchange-triggering messages arrive before either mint resolves
    harness.deliver(message("neo_embed_ready"));
    harness.deliver(message("neo_token_expired"));
    assert_eq!(harness.host.pending_tasks(), 2);
    harness.settle().await;

    // THEN: Both minted and both posted; only the initial one carried the redirect
    let exchanges = harness.frame.exchange_posts();
    assert_eq!(harness.minter.calls(), 2);
    assert_eq!(exchanges.len(), 2);
    assert_eq!(
        exchanges
            .iter()
            .filter(|exchange| exchange.get("redirectTo").is_some())
            .count(),
        1
    );
    assert_eq!(
        harness
            .events()
            .iter()
            .filter(|event| *event == "authenticated")
            .count(),
        1
    );
}
