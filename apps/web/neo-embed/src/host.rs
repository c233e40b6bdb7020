use crate::error::{NeoEmbedError, describe_js_error};

use embed_core::host::InboundListener;
use embed_core::{EmbedHost, FrameError, InboundEvent};

use futures_util::future::LocalBoxFuture;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MessageEvent, Window};

const MESSAGE_EVENT: &str = "message";

/// The page's `window` as an [`EmbedHost`].
pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    /// # Errors
    ///
    /// Returns [`NeoEmbedError::Dom`] outside a window context (e.g. a worker).
    pub fn new() -> Result<Self, NeoEmbedError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or_else(|| NeoEmbedError::dom("No window available"))
    }
}

impl EmbedHost for BrowserHost {
    type Window = JsValue;
    type Subscription = Closure<dyn Fn(MessageEvent)>;

    fn subscribe(
        &self,
        listener: InboundListener<JsValue>,
    ) -> Result<Self::Subscription, FrameError> {
        let closure = Closure::<dyn Fn(MessageEvent)>::new(move |event: MessageEvent| {
            listener(inbound_event(&event));
        });

        self.window
            .add_event_listener_with_callback(MESSAGE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| FrameError::subscribe(describe_js_error(&e)))?;

        Ok(closure)
    }

    fn unsubscribe(&self, subscription: Self::Subscription) {
        if let Err(e) = self.window.remove_event_listener_with_callback(
            MESSAGE_EVENT,
            subscription.as_ref().unchecked_ref(),
        ) {
            warn!("Failed to remove message listener: {}", describe_js_error(&e));
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Data that does not convert to JSON (functions, cyclic objects) becomes
/// `null` and is ignored by the session.
fn inbound_event(event: &MessageEvent) -> InboundEvent<JsValue> {
    InboundEvent {
        origin: event.origin(),
        source: event.source().map(JsValue::from),
        data: serde_wasm_bindgen::from_value(event.data()).unwrap_or(serde_json::Value::Null),
    }
}
