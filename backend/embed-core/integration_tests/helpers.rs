//! Test helpers for session integration tests.
//!
//! This module provides in-memory implementations of the platform seams:
//! - `MockFrame`: records location, posted messages and removals
//! - `MockHost`: keeps listeners, delivers events, queues spawned tasks
//! - `MockMinter`: mints numbered tokens or fails on demand
//! - `Harness`: a session wired to all of the above plus recording callbacks

use embed_core::{
    EmbedFrame, EmbedHost, EmbedSession, EmbedSettings, EventHandlers, FrameError, FrameHandle,
    FrameOwnership, HostMessage, InboundEvent, MintError, TokenMinter,
};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures_util::future::{LocalBoxFuture, join_all};
use serde_json::{Value, json};

/// Test constants
pub const NEO_ORIGIN: &str = "https://acme.neohr.io";
pub const FRAME_WINDOW: u32 = 1;
pub const OTHER_WINDOW: u32 = 2;

pub type TestSession = EmbedSession<MockFrame, MockHost, MockMinter, EventHandlers>;

// ============================================
// FRAME
// ============================================

#[derive(Debug, Default)]
struct FrameLog {
    location: RefCell<Option<String>>,
    posts: RefCell<Vec<(Value, String)>>,
    detach_count: Cell<u32>,
}

/// In-memory frame. Clones share the same log.
#[derive(Debug, Clone)]
pub struct MockFrame {
    log: Rc<FrameLog>,
    window: Rc<Cell<Option<u32>>>,
}

impl MockFrame {
    pub fn new() -> Self {
        Self {
            log: Rc::new(FrameLog::default()),
            window: Rc::new(Cell::new(Some(FRAME_WINDOW))),
        }
    }

    /// Simulate the frame losing (or never having) a content window.
    pub fn unload(&self) {
        self.window.set(None);
    }

    pub fn location(&self) -> Option<String> {
        self.log.location.borrow().clone()
    }

    /// Every posted message with its target origin.
    pub fn posts(&self) -> Vec<(Value, String)> {
        self.log.posts.borrow().clone()
    }

    /// Posted `neo_exchange_token` payloads only.
    pub fn exchange_posts(&self) -> Vec<Value> {
        self.posts()
            .into_iter()
            .map(|(value, _)| value)
            .filter(|value| value["type"] == json!("neo_exchange_token"))
            .collect()
    }

    /// Successful removals.
    pub fn detach_count(&self) -> u32 {
        self.log.detach_count.get()
    }
}

impl EmbedFrame for MockFrame {
    type Window = u32;

    fn content_window(&self) -> Option<u32> {
        self.window.get()
    }

    fn set_location(&self, url: &str) -> Result<(), FrameError> {
        *self.log.location.borrow_mut() = Some(url.to_string());
        Ok(())
    }

    fn post_message(
        &self,
        message: &HostMessage<'_>,
        target_origin: &str,
    ) -> Result<(), FrameError> {
        if self.window.get().is_none() {
            return Err(FrameError::no_content_window());
        }

        let value =
            serde_json::to_value(message).map_err(|e| FrameError::post_message(e.to_string()))?;
        self.log
            .posts
            .borrow_mut()
            .push((value, target_origin.to_string()));
        Ok(())
    }

    /// Like a DOM element, a frame can only be removed once.
    fn detach(&self) -> Result<(), FrameError> {
        if self.log.detach_count.get() > 0 {
            return Err(FrameError::detach("frame already removed"));
        }

        self.log.detach_count.set(1);
        Ok(())
    }
}

// ============================================
// HOST
// ============================================

type Listener = Rc<dyn Fn(InboundEvent<u32>)>;

#[derive(Default)]
struct HostInner {
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
    tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

/// In-memory page: a listener list and a task queue. Clones share state.
#[derive(Clone, Default)]
pub struct MockHost {
    inner: Rc<HostInner>,
}

impl MockHost {
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn pending_tasks(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    /// Deliver `event` to every attached listener, like `window` dispatching
    /// a `message` event.
    pub fn deliver(&self, event: InboundEvent<u32>) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(event.clone());
        }
    }

    /// Run spawned tasks (and anything they spawn) to completion.
    pub async fn run_pending(&self) {
        loop {
            let tasks: Vec<_> = self.inner.tasks.borrow_mut().drain(..).collect();
            if tasks.is_empty() {
                break;
            }
            join_all(tasks).await;
        }
    }
}

impl EmbedHost for MockHost {
    type Window = u32;
    type Subscription = u64;

    fn subscribe(
        &self,
        listener: Box<dyn Fn(InboundEvent<u32>)>,
    ) -> Result<u64, FrameError> {
        let id = self.inner.next_id.get() + 1;
        self.inner.next_id.set(id);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::from(listener)));
        Ok(id)
    }

    fn unsubscribe(&self, subscription: u64) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(id, _)| *id != subscription);
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.inner.tasks.borrow_mut().push(task);
    }
}

// ============================================
// MINTER
// ============================================

#[derive(Debug, Clone)]
enum MintBehavior {
    Succeed,
    Fail(Option<String>),
}

/// Mints `jwt-1`, `jwt-2`, ... or fails every call.
#[derive(Debug, Clone)]
pub struct MockMinter {
    behavior: MintBehavior,
    calls: Rc<Cell<u32>>,
}

impl MockMinter {
    pub fn succeeding() -> Self {
        Self {
            behavior: MintBehavior::Succeed,
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            behavior: MintBehavior::Fail(Some(message.to_string())),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn failing_without_message() -> Self {
        Self {
            behavior: MintBehavior::Fail(None),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl TokenMinter for MockMinter {
    async fn mint(&self) -> Result<String, MintError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        match &self.behavior {
            MintBehavior::Succeed => Ok(format!("jwt-{call}")),
            MintBehavior::Fail(Some(message)) => Err(MintError::new(message.clone())),
            MintBehavior::Fail(None) => Err(MintError::without_message()),
        }
    }
}

// ============================================
// EVENTS
// ============================================

/// Event handlers that append a line per callback to the returned log.
pub fn recording_handlers() -> (EventHandlers, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let push = |log: &Rc<RefCell<Vec<String>>>, line: &'static str| {
        let log = Rc::clone(log);
        move || log.borrow_mut().push(line.to_string())
    };
    let error_log = Rc::clone(&log);
    let route_log = Rc::clone(&log);

    let handlers = EventHandlers::new()
        .on_ready(push(&log, "ready"))
        .on_authenticated(push(&log, "authenticated"))
        .on_token_expiring(push(&log, "token_expiring"))
        .on_backdrop_visible(push(&log, "backdrop_visible"))
        .on_backdrop_hidden(push(&log, "backdrop_hidden"))
        .on_error(move |error| {
            error_log
                .borrow_mut()
                .push(format!("error:{}:{}", error.kind, error.message))
        })
        .on_route_change(move |path| route_log.borrow_mut().push(format!("route:{path}")));

    (handlers, log)
}

// ============================================
// EVENT BUILDERS
// ============================================

/// An event that passes the origin and source-window filter.
pub fn from_frame(data: Value) -> InboundEvent<u32> {
    InboundEvent {
        origin: NEO_ORIGIN.to_string(),
        source: Some(FRAME_WINDOW),
        data,
    }
}

pub fn message(tag: &str) -> Value {
    json!({ "type": tag })
}

// ============================================
// HARNESS
// ============================================

/// A session wired to mocks, with handles to inspect every side.
pub struct Harness {
    pub session: TestSession,
    pub host: MockHost,
    pub frame: MockFrame,
    pub minter: MockMinter,
    events: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    pub fn new(settings: EmbedSettings, minter: MockMinter, ownership: FrameOwnership) -> Self {
        let host = MockHost::default();
        let frame = MockFrame::new();
        let (handlers, events) = recording_handlers();

        let handle = match ownership {
            FrameOwnership::Created => FrameHandle::created(frame.clone()),
            FrameOwnership::Supplied => FrameHandle::supplied(frame.clone()),
        };

        let session = EmbedSession::new(settings, handle, host.clone(), minter.clone(), handlers);

        Self {
            session,
            host,
            frame,
            minter,
            events,
        }
    }

    /// Started session with redirect `/people`, a succeeding minter and a created frame.
    pub fn started() -> Self {
        Self::started_with(
            EmbedSettings::new(NEO_ORIGIN).with_redirect("/people"),
            MockMinter::succeeding(),
        )
    }

    pub fn started_with(settings: EmbedSettings, minter: MockMinter) -> Self {
        let harness = Self::new(settings, minter, FrameOwnership::Created);
        harness.session.start().expect("mock start cannot fail");
        harness
    }

    /// Deliver a trusted message from the frame.
    pub fn deliver(&self, data: Value) {
        self.host.deliver(from_frame(data));
    }

    /// Let spawned token exchanges finish.
    pub async fn settle(&self) {
        self.host.run_pending().await;
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}
