use common::ErrorLocation;
use embed_core::EmbedCoreError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors surfaced to JavaScript by the `NeoSDK` shell.
///
/// Thrown as a plain `Error` whose message is the display form; the
/// structured variant is kept for logging.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum NeoEmbedError {
    /// The JavaScript config object is missing or mistyped
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// The document could not provide or accept the iframe
    #[error("DOM Error: {message} {location}")]
    Dom {
        message: String,
        location: ErrorLocation,
    },

    /// Error from embed-core (subscription, frame navigation)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl NeoEmbedError {
    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<EmbedCoreError> for NeoEmbedError {
    #[track_caller]
    fn from(error: EmbedCoreError) -> Self {
        Self::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<NeoEmbedError> for JsValue {
    fn from(error: NeoEmbedError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Best-effort text for a thrown JavaScript value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
