use crate::error::embed::EmbedError;

use std::fmt;

/// Host callbacks for lifecycle and UI events. Every method is optional.
pub trait EmbedEvents {
    /// The embed boot page signalled ready for the first time.
    fn ready(&self) {}

    /// The first token exchange after ready was posted.
    fn authenticated(&self) {}

    fn error(&self, _error: &EmbedError) {}

    /// NEO asked for a fresh token; a silent refresh follows.
    fn token_expiring(&self) {}

    fn backdrop_visible(&self) {}

    fn backdrop_hidden(&self) {}

    fn route_change(&self, _path: &str) {}
}

/// No callbacks at all.
impl EmbedEvents for () {}

type Callback = Box<dyn Fn()>;

/// Closure-based [`EmbedEvents`], for hosts that only care about a few events.
///
/// ```
/// use embed_core::EventHandlers;
///
/// let handlers = EventHandlers::new()
///     .on_ready(|| println!("ready"))
///     .on_route_change(|path| println!("now at {path}"));
/// ```
#[derive(Default)]
pub struct EventHandlers {
    ready: Option<Callback>,
    authenticated: Option<Callback>,
    error: Option<Box<dyn Fn(&EmbedError)>>,
    token_expiring: Option<Callback>,
    backdrop_visible: Option<Callback>,
    backdrop_hidden: Option<Callback>,
    route_change: Option<Box<dyn Fn(&str)>>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_ready(mut self, callback: impl Fn() + 'static) -> Self {
        self.ready = Some(Box::new(callback));
        self
    }

    pub fn on_authenticated(mut self, callback: impl Fn() + 'static) -> Self {
        self.authenticated = Some(Box::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&EmbedError) + 'static) -> Self {
        self.error = Some(Box::new(callback));
        self
    }

    pub fn on_token_expiring(mut self, callback: impl Fn() + 'static) -> Self {
        self.token_expiring = Some(Box::new(callback));
        self
    }

    pub fn on_backdrop_visible(mut self, callback: impl Fn() + 'static) -> Self {
        self.backdrop_visible = Some(Box::new(callback));
        self
    }

    pub fn on_backdrop_hidden(mut self, callback: impl Fn() + 'static) -> Self {
        self.backdrop_hidden = Some(Box::new(callback));
        self
    }

    pub fn on_route_change(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.route_change = Some(Box::new(callback));
        self
    }
}

impl EmbedEvents for EventHandlers {
    fn ready(&self) {
        if let Some(callback) = &self.ready {
            callback();
        }
    }

    fn authenticated(&self) {
        if let Some(callback) = &self.authenticated {
            callback();
        }
    }

    fn error(&self, error: &EmbedError) {
        if let Some(callback) = &self.error {
            callback(error);
        }
    }

    fn token_expiring(&self) {
        if let Some(callback) = &self.token_expiring {
            callback();
        }
    }

    fn backdrop_visible(&self) {
        if let Some(callback) = &self.backdrop_visible {
            callback();
        }
    }

    fn backdrop_hidden(&self) {
        if let Some(callback) = &self.backdrop_hidden {
            callback();
        }
    }

    fn route_change(&self, path: &str) {
        if let Some(callback) = &self.route_change {
            callback(path);
        }
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("ready", &self.ready.is_some())
            .field("authenticated", &self.authenticated.is_some())
            .field("error", &self.error.is_some())
            .field("token_expiring", &self.token_expiring.is_some())
            .field("backdrop_visible", &self.backdrop_visible.is_some())
            .field("backdrop_hidden", &self.backdrop_hidden.is_some())
            .field("route_change", &self.route_change.is_some())
            .finish()
    }
}
