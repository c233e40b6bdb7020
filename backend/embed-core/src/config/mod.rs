use crate::error::config::ConfigError;

use url::Url;

/// Path prefix of the embed surface on the NEO origin.
pub const EMBED_BASE_PATH: &str = "/organization/embed";

/// Page the frame is pointed at when a session starts.
pub const BOOT_PATH: &str = const_format::concatcp!(EMBED_BASE_PATH, "/boot");

// ============================================
// SETTINGS
// ============================================

/// Origin and redirect part of a session's configuration.
///
/// Immutable once handed to a session. The origin is kept verbatim because it
/// is compared byte-for-byte against `MessageEvent.origin`; nothing here is
/// validated unless the caller asks via [`EmbedSettings::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSettings {
    neo_origin: String,
    redirect_to: Option<String>,
}

impl EmbedSettings {
    /// Settings for the NEO platform at `neo_origin` (e.g. `https://acme.neohr.io`).
    pub fn new(neo_origin: impl Into<String>) -> Self {
        Self {
            neo_origin: neo_origin.into(),
            redirect_to: None,
        }
    }

    /// Path the embedded app opens after the first successful token exchange.
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }

    pub fn neo_origin(&self) -> &str {
        &self.neo_origin
    }

    pub fn redirect_to(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }

    /// Absolute URL assigned to the frame on start.
    pub fn boot_url(&self) -> String {
        format!("{}{}", self.neo_origin, BOOT_PATH)
    }

    /// Check that the settings can ever match a real browser event.
    ///
    /// Browsers report `MessageEvent.origin` as a bare serialized origin, so an
    /// origin with a path, a trailing slash, a default port or upper-case host
    /// would silently drop every inbound message.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if:
    /// - The origin is empty, unparseable or not http(s)
    /// - The origin differs from its own serialized form
    /// - The redirect path does not start with `/`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neo_origin.is_empty() {
            return Err(ConfigError::validation("NEO origin cannot be empty"));
        }

        let url = Url::parse(&self.neo_origin).map_err(|e| {
            ConfigError::validation(format!("Invalid NEO origin '{}': {e}", self.neo_origin))
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ConfigError::validation(format!(
                "NEO origin must use http or https, got '{}'",
                url.scheme()
            )));
        }

        let serialized = url.origin().ascii_serialization();
        if serialized != self.neo_origin {
            return Err(ConfigError::validation(format!(
                "NEO origin '{}' will never match browser-reported origin '{serialized}'",
                self.neo_origin
            )));
        }

        match &self.redirect_to {
            Some(path) if !path.starts_with('/') => Err(ConfigError::validation(format!(
                "Redirect path must start with '/', got '{path}'"
            ))),
            _ => Ok(()),
        }
    }
}
