//! Reading the JavaScript config object passed to `new NeoSDK(config)`.
//!
//! ```js
//! new NeoSDK({
//!   neoOrigin: "https://acme.neohr.io",
//!   mintToken: async () => (await fetch("/neo-token")).text(),
//!   redirectTo: "/people",          // optional
//!   iframe: existingIframe,         // optional, used instead of creating one
//!   container: document.body,       // optional parent for a created iframe
//!   on: { ready() {}, error(e) {} } // optional callbacks
//! });
//! ```

use crate::error::{NeoEmbedError, describe_js_error};

use embed_core::EmbedSettings;

use js_sys::{Function, Object, Reflect};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlIFrameElement};

const NEO_ORIGIN_KEY: &str = "neoOrigin";
const MINT_TOKEN_KEY: &str = "mintToken";
const REDIRECT_TO_KEY: &str = "redirectTo";
const IFRAME_KEY: &str = "iframe";
const CONTAINER_KEY: &str = "container";
const ON_KEY: &str = "on";

/// The host's config, typed.
pub struct JsEmbedConfig {
    pub settings: EmbedSettings,
    pub mint_token: Function,
    pub iframe: Option<HtmlIFrameElement>,
    pub container: Option<HtmlElement>,
    pub on: Option<Object>,
}

impl JsEmbedConfig {
    /// Read and type-check `config`. Values are not validated here; see
    /// [`EmbedSettings::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`NeoEmbedError::Config`] if `config` is not an object, a
    /// required key is missing or a key holds the wrong kind of value.
    pub fn from_js(config: &JsValue) -> Result<Self, NeoEmbedError> {
        if !config.is_object() {
            return Err(NeoEmbedError::config("NeoSDK config must be an object"));
        }

        let neo_origin = required(config, NEO_ORIGIN_KEY)?
            .as_string()
            .ok_or_else(|| NeoEmbedError::config(format!("'{NEO_ORIGIN_KEY}' must be a string")))?;

        let mint_token = required(config, MINT_TOKEN_KEY)?
            .dyn_into::<Function>()
            .map_err(|_| NeoEmbedError::config(format!("'{MINT_TOKEN_KEY}' must be a function")))?;

        let redirect_to = match optional(config, REDIRECT_TO_KEY)? {
            Some(value) => {
                let path = value.as_string();
                if path.is_none() {
                    warn!("Ignoring '{REDIRECT_TO_KEY}': not a string");
                }
                path
            }
            None => None,
        };

        let iframe = optional(config, IFRAME_KEY)?
            .map(|value| {
                value.dyn_into::<HtmlIFrameElement>().map_err(|_| {
                    NeoEmbedError::config(format!("'{IFRAME_KEY}' must be an <iframe> element"))
                })
            })
            .transpose()?;

        let container = optional(config, CONTAINER_KEY)?
            .map(|value| {
                value.dyn_into::<HtmlElement>().map_err(|_| {
                    NeoEmbedError::config(format!("'{CONTAINER_KEY}' must be an HTML element"))
                })
            })
            .transpose()?;

        let on = optional(config, ON_KEY)?
            .map(|value| {
                value
                    .dyn_into::<Object>()
                    .map_err(|_| NeoEmbedError::config(format!("'{ON_KEY}' must be an object")))
            })
            .transpose()?;

        let mut settings = EmbedSettings::new(neo_origin);
        if let Some(path) = redirect_to {
            settings = settings.with_redirect(path);
        }

        Ok(Self {
            settings,
            mint_token,
            iframe,
            container,
            on,
        })
    }
}

fn read(target: &JsValue, key: &str) -> Result<JsValue, NeoEmbedError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(|e| {
        NeoEmbedError::config(format!("Failed to read '{key}': {}", describe_js_error(&e)))
    })
}

/// `undefined` and `null` count as absent.
fn optional(target: &JsValue, key: &str) -> Result<Option<JsValue>, NeoEmbedError> {
    let value = read(target, key)?;
    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

fn required(target: &JsValue, key: &str) -> Result<JsValue, NeoEmbedError> {
    optional(target, key)?.ok_or_else(|| NeoEmbedError::config(format!("'{key}' is required")))
}
