use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Settings Validation Error: {reason} {location}")]
    Validation {
        location: ErrorLocation,
        reason: String,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        ConfigError::Validation {
            location: ErrorLocation::from(Location::caller()),
            reason: reason.into(),
        }
    }
}
