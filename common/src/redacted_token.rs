//! Credential handling with redacted Debug output.

use crate::CredentialError;

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// A minted credential (e.g. a signed JWT) that never exposes its value in
/// logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedToken {
    inner: String,
}

impl RedactedToken {
    /// Wrap a freshly minted credential.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: token.into(),
        }
    }

    /// Get the raw credential for transmission.
    ///
    /// # Security Note
    /// Only call this when actually handing the credential to the embedded frame.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the credential length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the credential is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for RedactedToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedToken([REDACTED])")
    }
}

impl fmt::Display for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED TOKEN]")
    }
}

impl Drop for RedactedToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedToken {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(CredentialError::exposed("RedactedToken")))
    }
}
