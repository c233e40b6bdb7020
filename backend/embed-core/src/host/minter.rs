use crate::error::mint::MintError;

use std::future::Future;

use async_trait::async_trait;

/// Host-supplied source of fresh credentials (typically a signed JWT from
/// the host's backend). Called once per token exchange, never retried.
#[async_trait(?Send)]
pub trait TokenMinter {
    async fn mint(&self) -> Result<String, MintError>;
}

#[async_trait(?Send)]
impl<F, Fut> TokenMinter for F
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<String, MintError>> + 'static,
{
    async fn mint(&self) -> Result<String, MintError> {
        (self)().await
    }
}
