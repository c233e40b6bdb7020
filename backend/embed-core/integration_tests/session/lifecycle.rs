use crate::helpers::{Harness, MockFrame, MockHost, MockMinter, NEO_ORIGIN, message};

use embed_core::{EmbedSession, EmbedSettings, FrameHandle, FrameOwnership, Lifecycle};

use serde_json::json;

/// **VALUE**: Verifies that start attaches one listener and boots the frame.
///
/// **WHY THIS MATTERS**: Without the listener the ready signal is never heard;
/// without the boot URL the embedded app never sends it.
///
/// **BUG THIS CATCHES**: Would catch if start sets the location before subscribing
/// or uses the wrong boot path.
#[test]
fn given_new_session_when_started_then_listens_and_boots_frame() {
    // GIVEN: A fresh session
    let harness = Harness::new(
        EmbedSettings::new(NEO_ORIGIN),
        MockMinter::succeeding(),
        FrameOwnership::Created,
    );
    assert!(!harness.session.is_listening());
    assert_eq!(harness.frame.location(), None, "Construction must not navigate");

    // WHEN: Starting
    harness.session.start().expect("start should succeed");

    // THEN: One listener, frame at the boot page
    assert!(harness.session.is_listening());
    assert_eq!(harness.host.listener_count(), 1);
    assert_eq!(
        harness.frame.location().as_deref(),
        Some("https://acme.neohr.io/organization/embed/boot")
    );
}

/// **VALUE**: Verifies that a second start does not duplicate the listener.
///
/// **WHY THIS MATTERS**: Two listeners would handle every message twice: two mints
/// per refresh and doubled UI callbacks.
///
/// **BUG THIS CATCHES**: Would catch removal of the `is_listening` guard.
#[tokio::test]
async fn given_started_session_when_started_again_then_single_listener() {
    // GIVEN: A started session
    let harness = Harness::started();

    // WHEN: Starting again
    harness.session.start().expect("second start is a no-op");

    // THEN: Still one listener, and a message is handled once
    assert_eq!(harness.host.listener_count(), 1);
    harness.deliver(message("neo_backdrop_visible"));
    assert_eq!(harness.events(), vec!["backdrop_visible"]);
}

/// **VALUE**: Verifies that shutdown detaches the listener and is idempotent.
///
/// **WHY THIS MATTERS**: After `destroy()` the host page may keep running for a long
/// time. A lingering listener keeps minting tokens for a frame nobody shows.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The subscription is not handed back to the host
/// - A second shutdown panics on the missing subscription
/// - A failed second frame removal escapes shutdown or skips the state reset
#[tokio::test]
async fn given_started_session_when_shutdown_twice_then_messages_ignored_and_no_panic() {
    // GIVEN: A started session
    let harness = Harness::started();

    // WHEN: Shutting down twice
    harness.session.shutdown(true);
    harness.session.shutdown(true);

    // THEN: No listener remains, the frame was removed once and later messages do nothing
    assert_eq!(harness.host.listener_count(), 0);
    assert!(!harness.session.is_listening());
    assert_eq!(harness.frame.detach_count(), 1);
    assert_eq!(harness.session.lifecycle(), Lifecycle::Uninitialized);

    harness.deliver(message("neo_embed_ready"));
    harness.deliver(message("neo_route_change"));
    harness.settle().await;
    assert!(harness.events().is_empty());
    assert!(harness.frame.posts().is_empty());
}

#[test]
fn given_never_started_session_when_shutdown_then_no_panic() {
    let harness = Harness::new(
        EmbedSettings::new(NEO_ORIGIN),
        MockMinter::succeeding(),
        FrameOwnership::Created,
    );

    harness.session.shutdown(true);

    assert_eq!(harness.session.lifecycle(), Lifecycle::Uninitialized);
}

/// **VALUE**: Verifies frame removal follows ownership and the caller's request.
///
/// **WHY THIS MATTERS**: Removing a host-supplied iframe deletes part of the host's
/// own layout; never removing a created one leaks frames on every remount.
///
/// **BUG THIS CATCHES**: Would catch if the ownership check or the `remove_frame`
/// flag is ignored.
#[test]
fn given_frame_ownership_when_shutdown_then_only_created_frames_removed_on_request() {
    // GIVEN/WHEN/THEN: (ownership, remove_frame) -> detach count
    let cases = [
        (FrameOwnership::Created, true, 1),
        (FrameOwnership::Created, false, 0),
        (FrameOwnership::Supplied, true, 0),
        (FrameOwnership::Supplied, false, 0),
    ];

    for (ownership, remove_frame, expected) in cases {
        let harness = Harness::new(EmbedSettings::new(NEO_ORIGIN), MockMinter::succeeding(), ownership);
        harness.session.start().expect("start should succeed");

        harness.session.shutdown(remove_frame);

        assert_eq!(
            harness.frame.detach_count(),
            expected,
            "{ownership:?} with remove_frame={remove_frame}"
        );
    }
}

/// **VALUE**: Verifies that a restarted session runs the full handshake again.
///
/// **WHY THIS MATTERS**: Hosts unmount and remount embeds (e.g. SPA route changes).
/// The second mount must redirect and authenticate like the first.
///
/// **BUG THIS CATCHES**: Would catch if shutdown forgets to reset the lifecycle,
/// leaving the second ready treated as a duplicate.
#[tokio::test]
async fn given_shutdown_session_when_restarted_then_handshake_repeats() {
    // GIVEN: A session that completed the handshake, then shut down
    let harness = Harness::started();
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;
    harness.session.shutdown(false);
    assert_eq!(harness.session.lifecycle(), Lifecycle::Uninitialized);

    // WHEN: Restarted and ready again
    harness.session.start().expect("restart should succeed");
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;

    // THEN: A second initial exchange with the redirect
    let exchanges = harness.frame.exchange_posts();
    assert_eq!(exchanges.len(), 2);
    assert_eq!(exchanges[1]["redirectTo"], json!("/people"));
    assert_eq!(
        harness.events(),
        vec!["ready", "authenticated", "ready", "authenticated"]
    );
}

/// **VALUE**: Verifies that shutdown does not cancel an exchange already in flight.
///
/// **WHY THIS MATTERS**: There is no cancellation; documenting it keeps hosts from
/// assuming a mint cannot complete after `destroy()`.
///
/// **BUG THIS CATCHES**: Would catch a behavior change in either direction.
#[tokio::test]
async fn given_pending_exchange_when_shutdown_then_exchange_still_completes() {
    // GIVEN: A ready whose exchange has not run yet
    let harness = Harness::started();
    harness.deliver(message("neo_embed_ready"));
    assert_eq!(harness.host.pending_tasks(), 1);

    // WHEN: Shutting down, then letting the task run
    harness.session.shutdown(false);
    harness.settle().await;

    // THEN: The exchange was posted anyway
    assert_eq!(harness.frame.exchange_posts().len(), 1);
}

/// **VALUE**: Verifies the exact navigate message, independent of lifecycle.
///
/// **WHY THIS MATTERS**: Hosts drive NEO's router from their own navigation. It
/// must work whether or not the handshake has completed.
///
/// **BUG THIS CATCHES**: Would catch a lifecycle guard on navigate, a wrong shape,
/// or a wildcard target origin.
#[tokio::test]
async fn given_any_lifecycle_when_navigate_then_posts_exact_message_to_origin() {
    // GIVEN: A never-started session, then a ready one
    let harness = Harness::new(
        EmbedSettings::new(NEO_ORIGIN),
        MockMinter::succeeding(),
        FrameOwnership::Created,
    );

    // WHEN: Navigating before start
    harness.session.navigate("/settings");

    // THEN: Posted with the configured origin
    assert_eq!(
        harness.frame.posts(),
        vec![(
            json!({"type": "neo_navigate", "path": "/settings"}),
            NEO_ORIGIN.to_string()
        )]
    );

    // WHEN: Navigating after the handshake
    harness.session.start().expect("start should succeed");
    harness.deliver(message("neo_embed_ready"));
    harness.settle().await;
    harness.session.navigate("/people/42");

    // THEN: Posted again, same shape
    let last = harness.frame.posts().pop().expect("navigate posted");
    assert_eq!(last.0, json!({"type": "neo_navigate", "path": "/people/42"}));
}

#[test]
fn given_unloaded_frame_when_navigate_then_message_is_dropped() {
    let harness = Harness::started();
    harness.frame.unload();

    harness.session.navigate("/settings");

    assert!(harness.frame.posts().is_empty());
}

/// **VALUE**: Verifies that `launch` creates and starts in one step.
///
/// **WHY THIS MATTERS**: `createNeoSDK` is built on it; a launch that forgets to
/// start leaves the embed blank.
///
/// **BUG THIS CATCHES**: Would catch if `launch` stops calling `start`.
#[test]
fn given_settings_when_launched_then_session_is_listening() {
    // GIVEN: Mocks
    let host = MockHost::default();
    let frame = MockFrame::new();

    // WHEN: Launching
    let session = EmbedSession::launch(
        EmbedSettings::new(NEO_ORIGIN),
        FrameHandle::supplied(frame.clone()),
        host.clone(),
        MockMinter::succeeding(),
        (),
    )
    .expect("launch should succeed");

    // THEN: Started, with the supplied frame
    assert!(session.is_listening());
    assert_eq!(host.listener_count(), 1);
    assert!(session.frame().location().is_some());
    assert_eq!(session.settings().neo_origin(), NEO_ORIGIN);
}

/// **VALUE**: Verifies that dropping a session releases its listener.
///
/// **WHY THIS MATTERS**: Hosts that free the SDK without calling `destroy()` must
/// not get callbacks from a zombie session. In the browser the subscription is
/// the listener closure itself; leaving it registered after the session is gone
/// makes every later page message throw.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The listener captures a strong `Rc`
/// - Dropping the last handle does not hand the subscription back to the host
#[tokio::test]
async fn given_dropped_session_when_message_delivered_then_nothing_happens() {
    // GIVEN: A started session that is then dropped without shutdown
    let harness = Harness::started();
    let Harness {
        session,
        host,
        frame,
        minter,
        ..
    } = harness;
    assert_eq!(host.listener_count(), 1);
    drop(session);

    // THEN: The listener is gone
    assert_eq!(host.listener_count(), 0);

    // WHEN: Ready arrives anyway
    host.deliver(crate::helpers::from_frame(message("neo_embed_ready")));
    host.run_pending().await;

    // THEN: No mint, no post
    assert_eq!(minter.calls(), 0);
    assert!(frame.posts().is_empty());
}

#[test]
fn given_cloned_session_when_one_handle_dropped_then_listener_stays() {
    let harness = Harness::started();
    let clone = harness.session.clone();

    drop(clone);

    assert_eq!(harness.host.listener_count(), 1);
    assert!(harness.session.is_listening());
}
