use crate::error::EmbedError;
use crate::host::{EmbedEvents, EventHandlers};

use std::cell::RefCell;
use std::rc::Rc;

/// **VALUE**: Verifies that each builder method wires the matching trait method.
///
/// **WHY THIS MATTERS**: A crossed wire (e.g. `on_backdrop_hidden` stored in the
/// visible slot) makes the host's modal overlay stick.
///
/// **BUG THIS CATCHES**: Would catch any field mix-up in the builder or the impl.
#[test]
fn given_all_handlers_when_each_event_fires_then_matching_callback_runs() {
    // GIVEN: Handlers that record their name
    let calls = Rc::new(RefCell::new(Vec::<String>::new()));
    let record = |name: &'static str| {
        let calls = Rc::clone(&calls);
        move || calls.borrow_mut().push(name.to_string())
    };
    let error_calls = Rc::clone(&calls);
    let route_calls = Rc::clone(&calls);

    let handlers = EventHandlers::new()
        .on_ready(record("ready"))
        .on_authenticated(record("authenticated"))
        .on_token_expiring(record("token_expiring"))
        .on_backdrop_visible(record("backdrop_visible"))
        .on_backdrop_hidden(record("backdrop_hidden"))
        .on_error(move |e| error_calls.borrow_mut().push(format!("error:{}", e.kind)))
        .on_route_change(move |p| route_calls.borrow_mut().push(format!("route:{p}")));

    // WHEN: Firing every event
    handlers.ready();
    handlers.authenticated();
    handlers.token_expiring();
    handlers.backdrop_visible();
    handlers.backdrop_hidden();
    handlers.error(&EmbedError::token_exchange());
    handlers.route_change("/people");

    // THEN: Each callback ran once, in order
    assert_eq!(
        *calls.borrow(),
        vec![
            "ready",
            "authenticated",
            "token_expiring",
            "backdrop_visible",
            "backdrop_hidden",
            "error:token_exchange_error",
            "route:/people",
        ]
    );
}

#[test]
fn given_no_handlers_when_events_fire_then_nothing_happens() {
    let handlers = EventHandlers::new();

    handlers.ready();
    handlers.error(&EmbedError::provisioning_conflict());
    handlers.route_change("/people");

    assert!(format!("{:?}", handlers).contains("ready: false"));
}

#[test]
fn given_unit_events_when_events_fire_then_no_op() {
    ().ready();
    ().route_change("/people");
}
