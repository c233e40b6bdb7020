use crate::error::{NeoEmbedError, describe_js_error};

use embed_core::{EmbedFrame, FrameError, HostMessage};

use log::debug;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlIFrameElement};

/// Sandbox applied to iframes the SDK creates.
pub const SANDBOX_POLICY: &str = "allow-scripts allow-same-origin";

const FRAME_STYLE: [(&str, &str); 3] = [("width", "100%"), ("height", "100%"), ("border", "none")];

/// An `<iframe>` element as an [`EmbedFrame`].
pub struct IframeFrame {
    element: HtmlIFrameElement,
}

impl IframeFrame {
    /// Wrap an iframe supplied by the host, untouched.
    pub fn new(element: HtmlIFrameElement) -> Self {
        Self { element }
    }

    /// Create a sandboxed, full-size iframe and append it to `container`,
    /// or to `document.body` when no container is given.
    ///
    /// # Errors
    ///
    /// Returns [`NeoEmbedError::Dom`] if there is no document (or body) or
    /// the element cannot be created, styled or appended.
    pub fn create(container: Option<&HtmlElement>) -> Result<Self, NeoEmbedError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| NeoEmbedError::dom("No document available"))?;

        let element = document
            .create_element("iframe")
            .map_err(|e| dom_error("Failed to create iframe", &e))?
            .dyn_into::<HtmlIFrameElement>()
            .map_err(|_| NeoEmbedError::dom("Created element is not an iframe"))?;

        element
            .set_attribute("sandbox", SANDBOX_POLICY)
            .map_err(|e| dom_error("Failed to set sandbox", &e))?;

        let style = element.style();
        for (property, value) in FRAME_STYLE {
            style
                .set_property(property, value)
                .map_err(|e| dom_error("Failed to style iframe", &e))?;
        }

        let parent = match container {
            Some(container) => container.clone(),
            None => document
                .body()
                .ok_or_else(|| NeoEmbedError::dom("Document has no body"))?,
        };
        parent
            .append_child(&element)
            .map_err(|e| dom_error("Failed to append iframe", &e))?;

        debug!("Created embed iframe");
        Ok(Self { element })
    }

    pub fn element(&self) -> &HtmlIFrameElement {
        &self.element
    }
}

impl EmbedFrame for IframeFrame {
    type Window = JsValue;

    fn content_window(&self) -> Option<JsValue> {
        self.element.content_window().map(JsValue::from)
    }

    fn set_location(&self, url: &str) -> Result<(), FrameError> {
        self.element.set_src(url);
        Ok(())
    }

    fn post_message(
        &self,
        message: &HostMessage<'_>,
        target_origin: &str,
    ) -> Result<(), FrameError> {
        let window = self
            .element
            .content_window()
            .ok_or_else(|| FrameError::no_content_window())?;

        // Plain objects, not Maps, so the frame sees `data.type`.
        let payload = message
            .serialize(&Serializer::json_compatible())
            .map_err(|e| FrameError::post_message(e.to_string()))?;

        window
            .post_message(&payload, target_origin)
            .map_err(|e| FrameError::post_message(describe_js_error(&e)))
    }

    fn detach(&self) -> Result<(), FrameError> {
        if self.element.parent_node().is_none() {
            return Err(FrameError::detach("iframe is not attached to the document"));
        }

        self.element.remove();
        Ok(())
    }
}

#[track_caller]
fn dom_error(context: &str, error: &JsValue) -> NeoEmbedError {
    NeoEmbedError::dom(format!("{context}: {}", describe_js_error(error)))
}
