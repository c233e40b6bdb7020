//! Wire protocol between the host page and the embedded NEO application.
//!
//! The vocabulary is closed: [`EmbedMessage`] lists everything the embedded
//! app may send, [`HostMessage`] everything the host sends back. Both are
//! internally tagged on `type` so they travel as plain JS objects through
//! `postMessage`.
//!
//! # Messages
//!
//! - NEO → Host: `neo_embed_ready`, `neo_token_expired`,
//!   `neo_provisioning_conflict_error`, `neo_exchange_token_error`,
//!   `neo_backdrop_visible`, `neo_backdrop_hidden`, `neo_route_change`
//! - Host → NEO: `neo_navigate`, `neo_exchange_token`

pub mod inbound;
pub mod outbound;

pub use inbound::EmbedMessage;
pub use outbound::HostMessage;
