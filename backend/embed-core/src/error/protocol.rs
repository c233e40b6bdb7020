use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ProtocolError {
    #[error("Message Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for ProtocolError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ProtocolError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
