pub mod config;
pub mod error;
pub mod host;
pub mod protocol;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::{BOOT_PATH, EMBED_BASE_PATH, EmbedSettings};
pub use error::{EmbedCoreError, EmbedError, EmbedErrorKind, FrameError, MintError};
pub use host::{
    EmbedEvents, EmbedFrame, EmbedHost, EventHandlers, FrameHandle, FrameOwnership, InboundEvent,
    TokenMinter,
};
pub use protocol::{EmbedMessage, HostMessage};
pub use session::{EmbedSession, Lifecycle};
