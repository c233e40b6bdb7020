use crate::helpers::{FRAME_WINDOW, Harness, NEO_ORIGIN, OTHER_WINDOW, message};

use embed_core::{InboundEvent, Lifecycle};

use serde_json::json;

/// Assert the spoofed event had no observable effect at all.
async fn assert_rejected(harness: &Harness) {
    assert_eq!(harness.host.pending_tasks(), 0, "No exchange should be spawned");
    harness.settle().await;
    assert!(harness.events().is_empty(), "No callback should fire");
    assert!(harness.frame.posts().is_empty(), "Nothing should be posted");
    assert_eq!(harness.minter.calls(), 0, "No token should be minted");
    assert_eq!(harness.session.lifecycle(), Lifecycle::Uninitialized);
}

/// **VALUE**: Verifies that a ready message from another origin is dropped.
///
/// **WHY THIS MATTERS**: This is the security boundary. Any page that can post to
/// the host window could otherwise trigger a token mint and receive nothing less
/// than a valid credential flow.
///
/// **BUG THIS CATCHES**: Would catch if the origin check is removed, loosened to a
/// prefix/suffix match, or normalized.
#[tokio::test]
async fn given_foreign_origins_when_ready_delivered_then_ignored() {
    // GIVEN: Origins that merely resemble the configured one
    let origins = [
        "https://evil.example",
        "https://acme.neohr.io.evil.example",
        "https://acme.neohr.io/",
        "http://acme.neohr.io",
        "https://ACME.neohr.io",
        "",
    ];

    for origin in origins {
        let harness = Harness::started();

        // WHEN: A ready arrives from the right window but the wrong origin
        harness.host.deliver(InboundEvent {
            origin: origin.to_string(),
            source: Some(FRAME_WINDOW),
            data: message("neo_embed_ready"),
        });

        // THEN: No effect
        assert_rejected(&harness).await;
    }
}

/// **VALUE**: Verifies that a message from another window with the right origin is dropped.
///
/// **WHY THIS MATTERS**: A second NEO tab or frame on the page shares the origin.
/// Only this session's frame may drive this session.
///
/// **BUG THIS CATCHES**: Would catch if the source-window comparison is dropped.
#[tokio::test]
async fn given_other_window_when_ready_delivered_then_ignored() {
    // GIVEN: A started session
    let harness = Harness::started();

    // WHEN: Ready from a different window with the configured origin
    harness.host.deliver(InboundEvent {
        origin: NEO_ORIGIN.to_string(),
        source: Some(OTHER_WINDOW),
        data: message("neo_embed_ready"),
    });

    // THEN: No effect
    assert_rejected(&harness).await;
}

#[tokio::test]
async fn given_missing_source_when_ready_delivered_then_ignored() {
    let harness = Harness::started();

    harness.host.deliver(InboundEvent {
        origin: NEO_ORIGIN.to_string(),
        source: None,
        data: message("neo_embed_ready"),
    });

    assert_rejected(&harness).await;
}

/// **VALUE**: Verifies that nothing matches once the frame has no content window.
///
/// **WHY THIS MATTERS**: With no window to compare against, accepting the message
/// would mean trusting the origin alone.
///
/// **BUG THIS CATCHES**: Would catch a comparison of `Option`s where `None == None` passes.
#[tokio::test]
async fn given_unloaded_frame_when_ready_delivered_then_ignored() {
    // GIVEN: A frame without a content window
    let harness = Harness::started();
    harness.frame.unload();

    // WHEN: Ready with matching origin and the old window id
    harness.host.deliver(InboundEvent {
        origin: NEO_ORIGIN.to_string(),
        source: Some(FRAME_WINDOW),
        data: message("neo_embed_ready"),
    });

    // THEN: No effect
    assert_rejected(&harness).await;
}

/// **VALUE**: Verifies that trusted payloads outside the vocabulary are ignored.
///
/// **WHY THIS MATTERS**: Newer NEO builds may send messages this SDK does not know.
/// They must not break the session or be misread as a known message.
///
/// **BUG THIS CATCHES**: Would catch a panic on decode failure or a catch-all
/// mapping to an existing variant.
#[tokio::test]
async fn given_unknown_payloads_from_frame_when_delivered_then_ignored() {
    // GIVEN: A started session
    let harness = Harness::started();

    // WHEN: Unknown and malformed payloads arrive from the trusted frame
    harness.deliver(message("neo_something_new"));
    harness.deliver(json!({"type": "neo_route_change"}));
    harness.deliver(json!("neo_embed_ready"));
    harness.deliver(json!(null));

    // THEN: No effect
    assert_rejected(&harness).await;
}
