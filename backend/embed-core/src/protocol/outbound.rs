use common::RedactedToken;

use serde::{Serialize, Serializer};

/// Messages the host posts into the embedded frame.
///
/// Borrows its payload so the credential is never copied out of its
/// [`RedactedToken`]; the raw value only exists inside the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum HostMessage<'a> {
    #[serde(rename = "neo_navigate")]
    Navigate { path: &'a str },

    #[serde(rename = "neo_exchange_token")]
    ExchangeToken {
        #[serde(serialize_with = "expose_token")]
        jwt: &'a RedactedToken,

        /// Present only on the first exchange after the ready signal.
        #[serde(rename = "redirectTo", skip_serializing_if = "Option::is_none")]
        redirect_to: Option<&'a str>,
    },
}

impl<'a> HostMessage<'a> {
    pub fn navigate(path: &'a str) -> Self {
        HostMessage::Navigate { path }
    }

    pub fn exchange_token(jwt: &'a RedactedToken, redirect_to: Option<&'a str>) -> Self {
        HostMessage::ExchangeToken { jwt, redirect_to }
    }

    /// Wire tag, for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            HostMessage::Navigate { .. } => "neo_navigate",
            HostMessage::ExchangeToken { .. } => "neo_exchange_token",
        }
    }
}

fn expose_token<S>(token: &&RedactedToken, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(token.as_str())
}
