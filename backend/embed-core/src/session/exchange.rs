//! Token exchange: mint a credential and hand it to the embedded frame.

use super::SessionInner;
use crate::error::embed::EmbedError;
use crate::host::{EmbedEvents, EmbedFrame, EmbedHost, TokenMinter};
use crate::protocol::HostMessage;

use common::RedactedToken;

use log::{debug, info, warn};

/// Which handshake step triggered the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exchange {
    /// First exchange after ready: carries the redirect, fires `authenticated`.
    Initial,
    /// Silent refresh after token-expired.
    Refresh,
}

impl Exchange {
    pub(crate) fn includes_redirect(self) -> bool {
        self == Exchange::Initial
    }
}

impl<F, H, M, E> SessionInner<F, H, M, E>
where
    F: EmbedFrame + 'static,
    H: EmbedHost<Window = F::Window> + 'static,
    M: TokenMinter + 'static,
    E: EmbedEvents + 'static,
{
    /// Mint, post `neo_exchange_token`, and on the initial exchange fire
    /// `authenticated`. A mint failure becomes one `mint_error` report and
    /// nothing is posted. Never retries.
    pub(crate) async fn exchange_token(&self, exchange: Exchange) {
        let token = match self.minter.mint().await {
            Ok(jwt) => RedactedToken::new(jwt),
            Err(e) => {
                warn!("[embed {}] Token mint failed: {}", self.id, e);
                self.report(EmbedError::mint(&e));
                return;
            }
        };

        // An empty redirect is treated as absent.
        let redirect_to = if exchange.includes_redirect() {
            self.settings.redirect_to().filter(|path| !path.is_empty())
        } else {
            None
        };

        let posted = self.post(&HostMessage::exchange_token(&token, redirect_to));
        debug!(
            "[embed {}] {:?} exchange posted={} ({} byte token, redirect {:?})",
            self.id,
            exchange,
            posted,
            token.len(),
            redirect_to
        );

        if exchange.includes_redirect() {
            info!("[embed {}] Authenticated", self.id);
            self.events.authenticated();
        }
    }
}
