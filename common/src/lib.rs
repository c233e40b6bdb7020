//! Shared leaf types for the NEO embed workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations and credential wrappers
//! - **embed-core**: protocol and session controller operating on these types
//! - **neo-embed**: browser shell wiring the controller to the DOM
//!
//! Nothing here knows about frames or messages, so both the native core and
//! the wasm shell can depend on it.

pub mod error;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::credential_error::CredentialError;
pub use redacted_token::RedactedToken;
