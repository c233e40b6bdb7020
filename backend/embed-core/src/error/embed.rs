//! Error records reported to the host through the `error` callback.
//!
//! These are data, not control flow: the session builds one at the point a
//! failure is detected, hands it to the host and forgets it.

use crate::error::mint::MintError;

use std::fmt;

use serde::Serialize;
use thiserror::Error as ThisError;

pub const PROVISIONING_CONFLICT_MESSAGE: &str = "Failed to provision user";
pub const TOKEN_EXCHANGE_MESSAGE: &str = "Failed to exchange token with NEO platform";

/// Closed set of failure kinds visible to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedErrorKind {
    /// The embedded application rejected the exchanged token.
    TokenExchangeError,
    /// The host's minting capability failed.
    MintError,
    /// The embedded application could not provision the user.
    ProvisioningConflictError,
    /// Reserved; never produced by the session.
    Unknown,
}

impl EmbedErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedErrorKind::TokenExchangeError => "token_exchange_error",
            EmbedErrorKind::MintError => "mint_error",
            EmbedErrorKind::ProvisioningConflictError => "provisioning_conflict_error",
            EmbedErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EmbedErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error record handed to the host: `{ "type": kind, "message": text }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ThisError)]
#[error("{kind}: {message}")]
pub struct EmbedError {
    #[serde(rename = "type")]
    pub kind: EmbedErrorKind,
    pub message: String,
}

impl EmbedError {
    pub fn new(kind: EmbedErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn provisioning_conflict() -> Self {
        Self::new(
            EmbedErrorKind::ProvisioningConflictError,
            PROVISIONING_CONFLICT_MESSAGE,
        )
    }

    pub fn token_exchange() -> Self {
        Self::new(EmbedErrorKind::TokenExchangeError, TOKEN_EXCHANGE_MESSAGE)
    }

    pub fn mint(error: &MintError) -> Self {
        Self::new(EmbedErrorKind::MintError, error.host_message())
    }
}
