use crate::helpers::{Harness, message};

use embed_core::Lifecycle;

use serde_json::json;

/// **VALUE**: Verifies route-change forwarding.
///
/// **WHY THIS MATTERS**: Hosts mirror NEO's route into their own URL bar. A lost or
/// duplicated route event desynchronizes deep links.
///
/// **BUG THIS CATCHES**: Would catch if the path is not forwarded verbatim or if
/// the event touches the lifecycle.
#[tokio::test]
async fn given_route_change_when_delivered_then_forwards_path_once_without_state_change() {
    // GIVEN: A started session
    let harness = Harness::started();

    // WHEN: NEO reports a route change
    harness.deliver(json!({"type": "neo_route_change", "path": "/people"}));
    harness.settle().await;

    // THEN: One callback with the path, nothing else
    assert_eq!(harness.events(), vec!["route:/people"]);
    assert_eq!(harness.session.lifecycle(), Lifecycle::Uninitialized);
    assert!(harness.frame.posts().is_empty());
}

#[tokio::test]
async fn given_backdrop_messages_when_delivered_then_forwarded_in_order() {
    let harness = Harness::started();

    harness.deliver(message("neo_backdrop_visible"));
    harness.deliver(message("neo_backdrop_hidden"));
    harness.settle().await;

    assert_eq!(
        harness.events(),
        vec!["backdrop_visible", "backdrop_hidden"]
    );
    assert_eq!(harness.host.pending_tasks(), 0);
}

/// **VALUE**: Verifies that NEO-reported failures become one host error each.
///
/// **WHY THIS MATTERS**: These are the only signals a host gets when NEO rejects a
/// token or cannot provision the user. They carry fixed, documented messages.
///
/// **BUG THIS CATCHES**: Would catch swapped kinds, changed messages, or an
/// automatic retry being added.
#[tokio::test]
async fn given_error_messages_when_delivered_then_report_fixed_errors_without_retry() {
    // GIVEN: A session that completed the handshake
    let harness = Harness::started();
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;

    // WHEN: NEO reports both failures
    harness.deliver(message("neo_provisioning_conflict_error"));
    harness.deliver(message("neo_exchange_token_error"));
    harness.settle().await;

    // THEN: Two error callbacks, no new mint, lifecycle unchanged
    assert_eq!(
        harness.events(),
        vec![
            "ready",
            "authenticated",
            "error:provisioning_conflict_error:Failed to provision user",
            "error:token_exchange_error:Failed to exchange token with NEO platform",
        ]
    );
    assert_eq!(harness.minter.calls(), 1);
    assert!(harness.session.is_initialized());
}
