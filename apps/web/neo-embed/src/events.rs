use crate::error::describe_js_error;

use embed_core::{EmbedError, EmbedEvents};

use js_sys::{Function, Object, Reflect};
use log::warn;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

const READY: &str = "ready";
const AUTHENTICATED: &str = "authenticated";
const ERROR: &str = "error";
const TOKEN_EXPIRING: &str = "tokenExpiring";
const BACKDROP_VISIBLE: &str = "backdropVisible";
const BACKDROP_HIDDEN: &str = "backdropHidden";
const ROUTE_CHANGE: &str = "routeChange";

/// The host's `on` object as [`EmbedEvents`].
///
/// Missing or non-function entries are skipped. A callback that throws is
/// logged and does not affect the session.
#[derive(Default)]
pub struct JsEventHandlers {
    ready: Option<Function>,
    authenticated: Option<Function>,
    error: Option<Function>,
    token_expiring: Option<Function>,
    backdrop_visible: Option<Function>,
    backdrop_hidden: Option<Function>,
    route_change: Option<Function>,
}

impl JsEventHandlers {
    pub fn from_object(on: Option<&Object>) -> Self {
        let Some(on) = on else {
            return Self::default();
        };

        let callback = |name: &str| {
            Reflect::get(on, &JsValue::from_str(name))
                .ok()
                .and_then(|value| value.dyn_into::<Function>().ok())
        };

        Self {
            ready: callback(READY),
            authenticated: callback(AUTHENTICATED),
            error: callback(ERROR),
            token_expiring: callback(TOKEN_EXPIRING),
            backdrop_visible: callback(BACKDROP_VISIBLE),
            backdrop_hidden: callback(BACKDROP_HIDDEN),
            route_change: callback(ROUTE_CHANGE),
        }
    }
}

impl EmbedEvents for JsEventHandlers {
    fn ready(&self) {
        call(READY, self.ready.as_ref(), None);
    }

    fn authenticated(&self) {
        call(AUTHENTICATED, self.authenticated.as_ref(), None);
    }

    fn error(&self, error: &EmbedError) {
        if self.error.is_none() {
            return;
        }

        match error.serialize(&Serializer::json_compatible()) {
            Ok(value) => call(ERROR, self.error.as_ref(), Some(&value)),
            Err(e) => warn!("Failed to convert {} for the error callback: {e}", error.kind),
        }
    }

    fn token_expiring(&self) {
        call(TOKEN_EXPIRING, self.token_expiring.as_ref(), None);
    }

    fn backdrop_visible(&self) {
        call(BACKDROP_VISIBLE, self.backdrop_visible.as_ref(), None);
    }

    fn backdrop_hidden(&self) {
        call(BACKDROP_HIDDEN, self.backdrop_hidden.as_ref(), None);
    }

    fn route_change(&self, path: &str) {
        call(
            ROUTE_CHANGE,
            self.route_change.as_ref(),
            Some(&JsValue::from_str(path)),
        );
    }
}

fn call(name: &str, callback: Option<&Function>, argument: Option<&JsValue>) {
    let Some(callback) = callback else {
        return;
    };

    let result = match argument {
        Some(argument) => callback.call1(&JsValue::UNDEFINED, argument),
        None => callback.call0(&JsValue::UNDEFINED),
    };

    if let Err(e) = result {
        warn!("'{name}' callback threw: {}", describe_js_error(&e));
    }
}
