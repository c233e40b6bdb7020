//! Embed session controller.
//!
//! [`EmbedSession`] owns one cross-origin frame, listens for the closed set of
//! [`EmbedMessage`]s coming out of it, drives the ready → token-exchange
//! handshake and forwards UI events to the host's [`EmbedEvents`].
//!
//! # Filtering
//!
//! An inbound event is handled only when its origin equals the configured
//! origin byte-for-byte AND its source is the frame's content window.
//! Everything else is dropped without a callback, an error or a log line.
//!
//! # Concurrency
//!
//! Single-threaded. The synchronous part of each message (filter, lifecycle
//! check-and-flip, callbacks) runs inside the listener; a token exchange is
//! spawned on the host's executor afterwards. Exchanges are not single-flight:
//! a ready immediately followed by a token-expired mints twice and posts twice.

mod exchange;
pub(crate) mod state;

pub use state::Lifecycle;

use crate::config::EmbedSettings;
use crate::error::EmbedCoreError;
use crate::error::embed::EmbedError;
use crate::host::{
    EmbedEvents, EmbedFrame, EmbedHost, FrameHandle, InboundEvent, InboundListener, TokenMinter,
};
use crate::protocol::{EmbedMessage, HostMessage};
use exchange::Exchange;
use state::SessionState;

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use uuid::Uuid;

/// Controller for one embedded NEO frame.
///
/// Cloning is cheap and yields a handle to the same session.
pub struct EmbedSession<F, H, M, E>
where
    H: EmbedHost,
{
    inner: Rc<SessionInner<F, H, M, E>>,
}

impl<F, H, M, E> Clone for EmbedSession<F, H, M, E>
where
    H: EmbedHost,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

pub(crate) struct SessionInner<F, H, M, E>
where
    H: EmbedHost,
{
    id: Uuid,
    settings: EmbedSettings,
    frame: FrameHandle<F>,
    host: H,
    minter: M,
    events: E,
    state: SessionState,
    subscription: RefCell<Option<H::Subscription>>,
}

/// A session dropped without `shutdown` must not leave its listener behind:
/// the host would keep calling into freed state.
impl<F, H, M, E> Drop for SessionInner<F, H, M, E>
where
    H: EmbedHost,
{
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.get_mut().take() {
            self.host.unsubscribe(subscription);
            debug!("[embed {}] Message listener removed on drop", self.id);
        }
    }
}

impl<F, H, M, E> EmbedSession<F, H, M, E>
where
    F: EmbedFrame + 'static,
    H: EmbedHost<Window = F::Window> + 'static,
    M: TokenMinter + 'static,
    E: EmbedEvents + 'static,
{
    /// Create a session. Nothing is validated and no listener is attached
    /// until [`start`](Self::start).
    pub fn new(
        settings: EmbedSettings,
        frame: FrameHandle<F>,
        host: H,
        minter: M,
        events: E,
    ) -> Self {
        let id = Uuid::new_v4();
        debug!(
            "[embed {id}] Session created for {} ({:?} frame)",
            settings.neo_origin(),
            frame.ownership()
        );

        Self {
            inner: Rc::new(SessionInner {
                id,
                settings,
                frame,
                host,
                minter,
                events,
                state: SessionState::new(),
                subscription: RefCell::new(None),
            }),
        }
    }

    /// Create a session and start it.
    ///
    /// # Errors
    ///
    /// Same as [`start`](Self::start).
    pub fn launch(
        settings: EmbedSettings,
        frame: FrameHandle<F>,
        host: H,
        minter: M,
        events: E,
    ) -> Result<Self, EmbedCoreError> {
        let session = Self::new(settings, frame, host, minter, events);
        session.start()?;
        Ok(session)
    }

    /// Attach the inbound-message listener and point the frame at the boot page.
    ///
    /// Calling `start` again while the listener is attached logs a warning
    /// and does nothing. After [`shutdown`](Self::shutdown) it starts afresh.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedCoreError::Frame`] if the host refuses the subscription
    /// or the frame rejects the boot URL.
    pub fn start(&self) -> Result<(), EmbedCoreError> {
        let inner = &self.inner;

        if inner.state.is_listening() {
            warn!("[embed {}] Session already started, ignoring", inner.id);
            return Ok(());
        }

        let weak = Rc::downgrade(inner);
        let listener: InboundListener<F::Window> = Box::new(move |event| {
            if let Some(inner) = weak.upgrade() {
                SessionInner::on_message(&inner, event);
            }
        });

        let subscription = inner.host.subscribe(listener)?;
        *inner.subscription.borrow_mut() = Some(subscription);
        inner.state.set_listening(true);

        let boot_url = inner.settings.boot_url();
        inner.frame.frame().set_location(&boot_url)?;

        info!("[embed {}] Booting embed at {boot_url}", inner.id);
        Ok(())
    }

    /// Ask the embedded app to open `path`. Fire-and-forget: nothing is
    /// queued, so a message sent before the frame loads is lost.
    pub fn navigate(&self, path: &str) {
        debug!("[embed {}] Navigating to {path}", self.inner.id);
        self.inner.post(&HostMessage::navigate(path));
    }

    /// Detach the listener, optionally remove a frame this session created,
    /// and return to [`Lifecycle::Uninitialized`]. Safe to call repeatedly.
    ///
    /// A token exchange already in flight is not cancelled.
    pub fn shutdown(&self, remove_frame: bool) {
        let inner = &self.inner;

        let subscription = inner.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            inner.host.unsubscribe(subscription);
            info!("[embed {}] Message listener removed", inner.id);
        }
        inner.state.set_listening(false);

        if remove_frame && inner.frame.is_owned() {
            match inner.frame.frame().detach() {
                Ok(()) => debug!("[embed {}] Frame removed", inner.id),
                Err(e) => warn!("[embed {}] Failed to remove frame: {}", inner.id, e),
            }
        }

        inner.state.reset();
    }

    /// The embedded frame, for host-side manipulation.
    pub fn frame(&self) -> &F {
        self.inner.frame.frame()
    }

    pub fn settings(&self) -> &EmbedSettings {
        &self.inner.settings
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.state.lifecycle()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.state.is_initialized()
    }

    pub fn is_listening(&self) -> bool {
        self.inner.state.is_listening()
    }
}

impl<F, H, M, E> SessionInner<F, H, M, E>
where
    F: EmbedFrame + 'static,
    H: EmbedHost<Window = F::Window> + 'static,
    M: TokenMinter + 'static,
    E: EmbedEvents + 'static,
{
    /// Listener body: handle the synchronous part, then spawn any exchange.
    fn on_message(self: &Rc<Self>, event: InboundEvent<F::Window>) {
        if let Some(exchange) = self.dispatch(event) {
            let inner = Rc::clone(self);
            self.host
                .spawn(Box::pin(async move { inner.exchange_token(exchange).await }));
        }
    }

    /// Origin and source-window check. Both must match exactly; a missing
    /// source or a frame without a content window never matches.
    fn accepts(&self, event: &InboundEvent<F::Window>) -> bool {
        if event.origin != self.settings.neo_origin() {
            return false;
        }

        match (&event.source, self.frame.frame().content_window()) {
            (Some(source), Some(window)) => *source == window,
            _ => false,
        }
    }

    fn dispatch(&self, event: InboundEvent<F::Window>) -> Option<Exchange> {
        if !self.state.is_listening() || !self.accepts(&event) {
            return None;
        }

        let message = match EmbedMessage::from_value(event.data) {
            Ok(message) => message,
            Err(e) => {
                debug!("[embed {}] Ignoring unrecognized message: {}", self.id, e);
                return None;
            }
        };

        debug!("[embed {}] Received {}", self.id, message.tag());

        match message {
            EmbedMessage::Ready => {
                if !self.state.mark_ready() {
                    debug!("[embed {}] Duplicate ready signal ignored", self.id);
                    return None;
                }
                info!("[embed {}] Embed ready, starting token exchange", self.id);
                self.events.ready();
                Some(Exchange::Initial)
            }
            EmbedMessage::TokenExpired => {
                info!("[embed {}] Token expired, refreshing", self.id);
                self.events.token_expiring();
                Some(Exchange::Refresh)
            }
            EmbedMessage::ProvisioningConflictError => {
                self.report(EmbedError::provisioning_conflict());
                None
            }
            EmbedMessage::ExchangeTokenError => {
                self.report(EmbedError::token_exchange());
                None
            }
            EmbedMessage::BackdropVisible => {
                self.events.backdrop_visible();
                None
            }
            EmbedMessage::BackdropHidden => {
                self.events.backdrop_hidden();
                None
            }
            EmbedMessage::RouteChange { path } => {
                self.events.route_change(&path);
                None
            }
        }
    }

    fn report(&self, error: EmbedError) {
        warn!("[embed {}] Reporting {}", self.id, error);
        self.events.error(&error);
    }

    /// Post to the frame, scoped to the configured origin.
    ///
    /// Returns whether the message was handed to the platform.
    fn post(&self, message: &HostMessage<'_>) -> bool {
        match self
            .frame
            .frame()
            .post_message(message, self.settings.neo_origin())
        {
            Ok(()) => true,
            Err(e) if e.is_not_loaded() => {
                debug!("[embed {}] Dropped {}: {}", self.id, message.tag(), e);
                false
            }
            Err(e) => {
                warn!("[embed {}] Failed to post {}: {}", self.id, message.tag(), e);
                false
            }
        }
    }
}
