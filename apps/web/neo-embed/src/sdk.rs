use crate::config::JsEmbedConfig;
use crate::error::NeoEmbedError;
use crate::events::JsEventHandlers;
use crate::frame::IframeFrame;
use crate::host::BrowserHost;
use crate::minter::JsMinter;

use embed_core::{EmbedSession, EmbedSettings, FrameHandle};

use js_sys::Promise;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::HtmlIFrameElement;

type BrowserSession = EmbedSession<IframeFrame, BrowserHost, JsMinter, JsEventHandlers>;

/// Everything a session is built from, read out of the JS config.
struct SessionParts {
    settings: EmbedSettings,
    frame: FrameHandle<IframeFrame>,
    host: BrowserHost,
    minter: JsMinter,
    events: JsEventHandlers,
}

/// The `NeoSDK` class exported to JavaScript.
#[wasm_bindgen(js_name = NeoSDK)]
pub struct NeoSdk {
    session: BrowserSession,
}

#[wasm_bindgen(js_class = NeoSDK)]
impl NeoSdk {
    /// Build the session and, unless `config.iframe` is given, create the
    /// iframe. Does not navigate or listen until `init()`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NeoSdk, JsValue> {
        Ok(Self::from_config(&config)?)
    }

    /// Start listening and load the boot page. Both happen before `init()`
    /// returns; the promise only reports the outcome. It does not wait for
    /// the embed to be ready; use `on.ready` for that.
    pub fn init(&self) -> Promise {
        match self.session.start() {
            Ok(()) => Promise::resolve(&JsValue::UNDEFINED),
            Err(e) => Promise::reject(&NeoEmbedError::from(e).into()),
        }
    }

    /// Ask NEO to route to `path`.
    pub fn navigate(&self, path: &str) {
        self.session.navigate(path);
    }

    /// Stop listening. A created iframe is removed unless `removeIframe` is `false`.
    pub fn destroy(&self, remove_iframe: Option<bool>) {
        self.session.shutdown(remove_iframe.unwrap_or(true));
    }

    #[wasm_bindgen(js_name = getIframe)]
    pub fn get_iframe(&self) -> HtmlIFrameElement {
        self.session.frame().element().clone()
    }
}

impl NeoSdk {
    fn from_config(config: &JsValue) -> Result<Self, NeoEmbedError> {
        let parts = SessionParts::from_config(config)?;
        let session = EmbedSession::new(
            parts.settings,
            parts.frame,
            parts.host,
            parts.minter,
            parts.events,
        );

        Ok(Self { session })
    }
}

impl SessionParts {
    fn from_config(config: &JsValue) -> Result<Self, NeoEmbedError> {
        let config = JsEmbedConfig::from_js(config)?;

        if let Err(e) = config.settings.validate() {
            warn!("NeoSDK config looks wrong, messages from the embed may be dropped: {e}");
        }

        let frame = match config.iframe {
            Some(element) => FrameHandle::supplied(IframeFrame::new(element)),
            None => FrameHandle::created(IframeFrame::create(config.container.as_ref())?),
        };

        Ok(Self {
            settings: config.settings,
            frame,
            host: BrowserHost::new()?,
            minter: JsMinter::new(config.mint_token),
            events: JsEventHandlers::from_object(config.on.as_ref()),
        })
    }
}

/// Construct a `NeoSDK` and start it in one call.
#[wasm_bindgen(js_name = createNeoSDK)]
pub async fn create_neo_sdk(config: JsValue) -> Result<NeoSdk, JsValue> {
    let parts = SessionParts::from_config(&config)?;
    let session = EmbedSession::launch(
        parts.settings,
        parts.frame,
        parts.host,
        parts.minter,
        parts.events,
    )
    .map_err(NeoEmbedError::from)?;

    Ok(NeoSdk { session })
}
