use crate::error::protocol::ProtocolError;

use serde::{Deserialize, Serialize};

/// Messages the embedded application posts to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmbedMessage {
    /// The embed boot page has loaded and is waiting for a token.
    #[serde(rename = "neo_embed_ready")]
    Ready,

    /// The session token is about to expire; a fresh one is needed.
    #[serde(rename = "neo_token_expired")]
    TokenExpired,

    #[serde(rename = "neo_provisioning_conflict_error")]
    ProvisioningConflictError,

    #[serde(rename = "neo_exchange_token_error")]
    ExchangeTokenError,

    /// A modal or drawer opened inside NEO.
    #[serde(rename = "neo_backdrop_visible")]
    BackdropVisible,

    /// A modal or drawer closed inside NEO.
    #[serde(rename = "neo_backdrop_hidden")]
    BackdropHidden,

    #[serde(rename = "neo_route_change")]
    RouteChange { path: String },
}

impl EmbedMessage {
    /// Decode an inbound `MessageEvent.data` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Decode`] for anything outside the closed
    /// vocabulary, including a known tag with missing fields.
    #[track_caller]
    pub fn from_value(value: serde_json::Value) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Wire tag, for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            EmbedMessage::Ready => "neo_embed_ready",
            EmbedMessage::TokenExpired => "neo_token_expired",
            EmbedMessage::ProvisioningConflictError => "neo_provisioning_conflict_error",
            EmbedMessage::ExchangeTokenError => "neo_exchange_token_error",
            EmbedMessage::BackdropVisible => "neo_backdrop_visible",
            EmbedMessage::BackdropHidden => "neo_backdrop_hidden",
            EmbedMessage::RouteChange { .. } => "neo_route_change",
        }
    }
}
