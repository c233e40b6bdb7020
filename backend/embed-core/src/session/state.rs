//! Lifecycle tracking for a single embed session.
//!
//! Tracks whether the ready handshake has completed and whether the
//! inbound-message listener is attached. Both live in `Cell`s: the session is
//! single-threaded and every read-then-write happens inside one synchronous
//! segment of the message handler.

use std::cell::Cell;
use std::fmt;

/// Handshake state. `Ready` has no outgoing transition other than teardown;
/// token refreshes loop on `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Ready,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Uninitialized => write!(f, "uninitialized"),
            Lifecycle::Ready => write!(f, "ready"),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SessionState {
    lifecycle: Cell<Lifecycle>,
    listening: Cell<bool>,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.get()
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.lifecycle.get() == Lifecycle::Ready
    }

    pub(crate) fn is_listening(&self) -> bool {
        self.listening.get()
    }

    /// Move to `Ready`.
    ///
    /// Returns true on the transition, false if the session was already ready.
    pub(crate) fn mark_ready(&self) -> bool {
        self.lifecycle.replace(Lifecycle::Ready) == Lifecycle::Uninitialized
    }

    pub(crate) fn set_listening(&self, listening: bool) {
        self.listening.set(listening);
    }

    /// Back to `Uninitialized`; the next ready signal repeats the handshake.
    pub(crate) fn reset(&self) {
        self.lifecycle.set(Lifecycle::Uninitialized);
    }
}
