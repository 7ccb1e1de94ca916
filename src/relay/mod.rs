pub mod beam;

use async_trait::async_trait;
use log::error;
use std::time::Duration;
use thiserror::Error;

use crate::models::chat::Turn;

pub use self::beam::BeamRelay;

/// Shown to the user in place of an answer whenever the endpoint call fails.
pub const FALLBACK_MESSAGE: &str = "Sorry, I couldn't fetch a response. Please try again.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("API Error: {0}")]
    Status(u16),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Forwards one chat turn to the inference service.
#[async_trait]
pub trait ChatRelay: Send + Sync {
    async fn try_predict(
        &self,
        message: &str,
        history: &[Turn],
        profile: &str
    ) -> Result<String, RelayError>;

    /// Like [`ChatRelay::try_predict`], but every failure is logged and
    /// replaced with [`FALLBACK_MESSAGE`].
    async fn predict(&self, message: &str, history: &[Turn], profile: &str) -> String {
        match self.try_predict(message, history, profile).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("{}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
