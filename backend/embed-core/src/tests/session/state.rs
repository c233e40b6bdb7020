use crate::session::Lifecycle;
use crate::session::state::SessionState;

/// **VALUE**: Verifies the one-way Uninitialized → Ready transition.
///
/// **WHY THIS MATTERS**: `mark_ready()` returning true is what triggers the initial
/// token exchange. If it returned true twice, a reloaded embed would re-run the
/// redirecting exchange and yank the user back to the initial route.
///
/// **BUG THIS CATCHES**: Would catch if `mark_ready()` compares the new value
/// instead of the previous one.
#[test]
fn given_new_state_when_marked_ready_twice_then_only_first_transitions() {
    // GIVEN: Fresh state
    let state = SessionState::new();
    assert_eq!(state.lifecycle(), Lifecycle::Uninitialized);
    assert!(!state.is_listening());

    // WHEN: Marking ready twice
    let first = state.mark_ready();
    let second = state.mark_ready();

    // THEN: Only the first call transitions
    assert!(first, "First ready should transition");
    assert!(!second, "Second ready should be a no-op");
    assert!(state.is_initialized());
}

#[test]
fn given_ready_state_when_reset_then_next_ready_transitions_again() {
    let state = SessionState::new();
    state.mark_ready();

    state.reset();

    assert_eq!(state.lifecycle(), Lifecycle::Uninitialized);
    assert!(state.mark_ready());
}

#[test]
fn given_state_when_listening_toggled_then_reflected() {
    let state = SessionState::new();

    state.set_listening(true);
    assert!(state.is_listening());

    state.set_listening(false);
    assert!(!state.is_listening());
}

#[test]
fn given_lifecycle_when_displayed_then_lowercase() {
    assert_eq!(Lifecycle::Uninitialized.to_string(), "uninitialized");
    assert_eq!(Lifecycle::Ready.to_string(), "ready");
}
