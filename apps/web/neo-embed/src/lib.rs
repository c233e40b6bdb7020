//! Browser shell for the NEO embed SDK.
//!
//! Wires [`embed_core::EmbedSession`] to the DOM: an `<iframe>` frame, the
//! page's `message` event, a JavaScript `mintToken` function and the host's
//! `on` callbacks. The exported `NeoSDK` class and `createNeoSDK` function
//! are the whole JavaScript surface.

pub mod config;
pub mod error;
pub mod events;
pub mod frame;
pub mod host;
pub mod logger;
pub mod minter;
pub mod sdk;

#[cfg(test)]
mod tests;

pub use error::NeoEmbedError;
pub use sdk::{NeoSdk, create_neo_sdk};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module start hook: panic messages to the console, then logging.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = logger::initialize(logger::DEFAULT_LOG_LEVEL) {
        web_sys::console::warn_1(&e.to_string().into());
    }
}
