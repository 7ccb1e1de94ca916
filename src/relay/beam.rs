use async_trait::async_trait;
use log::debug;
use reqwest::{ Client as HttpClient, StatusCode };
use std::time::Duration;

use super::{ ChatRelay, RelayError };
use crate::config::{ ConfigError, RelayConfig };
use crate::models::chat::{ BackendAnswer, PredictPayload, Turn };

/// Relay backed by a Beam deployment reached over plain HTTP(S).
pub struct BeamRelay {
    http: HttpClient,
    endpoint: String,
    timeout: Duration,
}

impl BeamRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::builder()
            .default_headers(config.default_headers()?)
            .timeout(config.timeout)
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.to_string(),
            timeout: config.timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() { RelayError::Timeout(self.timeout) } else { RelayError::Transport(err) }
    }
}

#[async_trait]
impl ChatRelay for BeamRelay {
    async fn try_predict(
        &self,
        message: &str,
        history: &[Turn],
        profile: &str
    ) -> Result<String, RelayError> {
        let payload = PredictPayload::new(message, history, profile);
        debug!("POST {} ({} prior turns)", self.endpoint, history.len());

        let resp = self.http
            .post(&self.endpoint)
            .json(&payload)
            .send().await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RelayError::Status(status.as_u16()));
        }

        let bytes = resp.bytes().await.map_err(|e| self.classify(e))?;
        let answer: BackendAnswer = serde_json
            ::from_slice(&bytes)
            .map_err(|e| RelayError::Decode(e.to_string()))?;

        Ok(answer.into_text())
    }
}
