use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Message reported to the host when the minter fails without a description.
pub const MINT_FAILED_MESSAGE: &str = "Failed to mint token";

/// Failure of the host's token-minting capability.
#[derive(Debug, ThisError)]
pub enum MintError {
    #[error("Mint Error: {} {location}", .message.as_deref().unwrap_or(MINT_FAILED_MESSAGE))]
    Failed {
        message: Option<String>,
        location: ErrorLocation,
    },
}

impl MintError {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        MintError::Failed {
            message: Some(message.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A failure that carries no usable description (e.g. a non-`Error` rejection).
    #[track_caller]
    pub fn without_message() -> Self {
        MintError::Failed {
            message: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text handed to the host's error callback.
    pub fn host_message(&self) -> String {
        match self {
            MintError::Failed { message, .. } => message
                .clone()
                .unwrap_or_else(|| MINT_FAILED_MESSAGE.to_string()),
        }
    }
}
