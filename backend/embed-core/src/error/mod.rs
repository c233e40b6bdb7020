pub mod config;
pub mod embed;
pub mod frame;
pub mod mint;
pub mod protocol;

pub use config::ConfigError;
pub use embed::{EmbedError, EmbedErrorKind};
pub use frame::FrameError;
pub use mint::MintError;
pub use protocol::ProtocolError;

use thiserror::Error;

/// Errors returned by the session's fallible entry points (`start`, `launch`).
///
/// Config, protocol and mint errors never get here: `validate` returns its
/// own [`ConfigError`], undecodable messages are dropped and mint failures go
/// to the host's `error` callback.
#[derive(Debug, Error)]
pub enum EmbedCoreError {
    #[error(transparent)]
    Frame(#[from] FrameError),
}
