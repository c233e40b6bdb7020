//! Errors raised by the platform seams that own the embedded frame.
//!
//! Only a failed subscription or boot navigation reaches the host (through
//! `start`). Post and detach failures are logged and dropped, matching the
//! fire-and-forget contract of postMessage.

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum FrameError {
    #[error("Frame has no content window {location}")]
    NoContentWindow { location: ErrorLocation },

    #[error("Post Message Error: {message} {location}")]
    PostMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Detach Error: {message} {location}")]
    Detach {
        message: String,
        location: ErrorLocation,
    },

    #[error("Subscribe Error: {message} {location}")]
    Subscribe {
        message: String,
        location: ErrorLocation,
    },
}

impl FrameError {
    #[track_caller]
    pub fn no_content_window() -> Self {
        FrameError::NoContentWindow {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn post_message(message: impl Into<String>) -> Self {
        FrameError::PostMessage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn detach(message: impl Into<String>) -> Self {
        FrameError::Detach {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn subscribe(message: impl Into<String>) -> Self {
        FrameError::Subscribe {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A frame that has not loaded yet has no window to post to; that is
    /// expected early in the lifecycle and not worth a warning.
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, FrameError::NoContentWindow { .. })
    }
}
