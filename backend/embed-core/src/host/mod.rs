//! Platform seams the session is generic over.
//!
//! The session never touches the DOM directly. A browser shell implements
//! these traits over `HtmlIFrameElement` and `window`'s `message` event;
//! tests implement them in memory.
//!
//! - [`EmbedFrame`] - the cross-origin frame (location, postMessage, removal)
//! - [`EmbedHost`] - message subscription and the local task executor
//! - [`TokenMinter`] - the host's credential source
//! - [`EmbedEvents`] - the host's optional callbacks

pub mod events;
pub mod minter;

pub use events::{EmbedEvents, EventHandlers};
pub use minter::TokenMinter;

use crate::error::frame::FrameError;
use crate::protocol::HostMessage;

use futures_util::future::LocalBoxFuture;

/// A cross-window message as delivered by the platform, before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent<W> {
    /// `MessageEvent.origin` as reported by the browser.
    pub origin: String,
    /// `MessageEvent.source`; `None` when the platform reports no window.
    pub source: Option<W>,
    /// `MessageEvent.data`, converted to JSON.
    pub data: serde_json::Value,
}

/// Callback registered with [`EmbedHost::subscribe`].
pub type InboundListener<W> = Box<dyn Fn(InboundEvent<W>)>;

/// The embedded cross-origin frame.
pub trait EmbedFrame {
    /// Window identity compared against [`InboundEvent::source`].
    type Window: PartialEq;

    /// The frame's content window, if it currently has one.
    fn content_window(&self) -> Option<Self::Window>;

    /// Point the frame at `url`.
    fn set_location(&self, url: &str) -> Result<(), FrameError>;

    /// Post `message` to the content window, restricted to `target_origin`.
    fn post_message(&self, message: &HostMessage<'_>, target_origin: &str)
    -> Result<(), FrameError>;

    /// Remove the frame from the page.
    fn detach(&self) -> Result<(), FrameError>;
}

/// The page-level environment: message events and a single-threaded executor.
pub trait EmbedHost {
    type Window;

    /// Token returned by `subscribe` and handed back to `unsubscribe`.
    type Subscription;

    fn subscribe(
        &self,
        listener: InboundListener<Self::Window>,
    ) -> Result<Self::Subscription, FrameError>;

    fn unsubscribe(&self, subscription: Self::Subscription);

    /// Run `task` on the page's execution context without blocking it.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Whether the session created its frame or was handed one by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOwnership {
    Created,
    Supplied,
}

/// A frame plus who owns it. Only created frames are removed on shutdown.
#[derive(Debug)]
pub struct FrameHandle<F> {
    frame: F,
    ownership: FrameOwnership,
}

impl<F> FrameHandle<F> {
    /// A frame the session created and may remove.
    pub fn created(frame: F) -> Self {
        Self {
            frame,
            ownership: FrameOwnership::Created,
        }
    }

    /// A frame supplied by the host; never removed by the session.
    pub fn supplied(frame: F) -> Self {
        Self {
            frame,
            ownership: FrameOwnership::Supplied,
        }
    }

    pub fn frame(&self) -> &F {
        &self.frame
    }

    pub fn ownership(&self) -> FrameOwnership {
        self.ownership
    }

    pub fn is_owned(&self) -> bool {
        self.ownership == FrameOwnership::Created
    }
}
