use embed_core::{MintError, TokenMinter};

use async_trait::async_trait;
use js_sys::{Function, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// The host's `mintToken` function as a [`TokenMinter`].
///
/// Accepts a function returning a string or a promise of one. A thrown or
/// rejected `Error` keeps its message; any other rejection reason is
/// reported with the fallback message.
pub struct JsMinter {
    mint_token: Function,
}

impl JsMinter {
    pub fn new(mint_token: Function) -> Self {
        Self { mint_token }
    }
}

#[async_trait(?Send)]
impl TokenMinter for JsMinter {
    async fn mint(&self) -> Result<String, MintError> {
        let returned = self
            .mint_token
            .call0(&JsValue::UNDEFINED)
            .map_err(|e| mint_error(&e))?;

        let resolved = JsFuture::from(Promise::resolve(&returned))
            .await
            .map_err(|e| mint_error(&e))?;

        resolved
            .as_string()
            .ok_or_else(|| MintError::new("mintToken must resolve to a string"))
    }
}

fn mint_error(reason: &JsValue) -> MintError {
    match reason.dyn_ref::<js_sys::Error>() {
        Some(error) => MintError::new(String::from(error.message())),
        None => MintError::without_message(),
    }
}
