use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Misuse of a redacted credential wrapper.
#[derive(Debug, ThisError)]
pub enum CredentialError {
    /// A wrapper reached a serializer instead of being exposed explicitly
    #[error("Credential Exposure Error: {credential} cannot be serialized, use as_str() {location}")]
    Exposed {
        credential: &'static str,
        location: ErrorLocation,
    },
}

impl CredentialError {
    #[track_caller]
    pub fn exposed(credential: &'static str) -> Self {
        Self::Exposed {
            credential,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
