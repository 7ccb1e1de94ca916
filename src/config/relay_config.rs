use crate::cli::Args;
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    ACCEPT,
    ACCEPT_ENCODING,
    AUTHORIZATION,
    CONNECTION,
    CONTENT_TYPE,
};
use std::time::Duration;
use thiserror::Error;
use url::Url;

const BEAM_HOST_SUFFIX: &str = "apps.beam.cloud";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid endpoint url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid auth token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Everything the relay needs to reach the inference endpoint.
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct RelayConfig {
    pub endpoint: Url,
    auth_token: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn beam_endpoint(deployment_id: &str) -> Result<Url, ConfigError> {
    let raw = format!("https://{}.{}", deployment_id, BEAM_HOST_SUFFIX);
    Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source })
}

impl RelayConfig {
    pub fn new(endpoint: Url, auth_token: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let auth_token = auth_token.into();
        if auth_token.trim().is_empty() {
            return Err(ConfigError::Missing("BEAM_AUTH_TOKEN"));
        }
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        let config = Self { endpoint, auth_token, timeout };
        // Surface a token that cannot be sent as a header now, not on the first chat turn.
        config.default_headers()?;
        Ok(config)
    }

    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let endpoint = match non_blank(args.endpoint_url.as_deref()) {
            Some(raw) =>
                Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
                    url: raw.to_string(),
                    source,
                })?,
            None => {
                let deployment_id = non_blank(args.deployment_id.as_deref()).ok_or(
                    ConfigError::Missing("BEAM_DEPLOYMENT_ID")
                )?;
                beam_endpoint(deployment_id)?
            }
        };
        let auth_token = non_blank(args.auth_token.as_deref()).ok_or(
            ConfigError::Missing("BEAM_AUTH_TOKEN")
        )?;

        Self::new(endpoint, auth_token, Duration::from_secs(args.request_timeout_secs))
    }

    /// The fixed header set attached to every outbound request.
    pub fn default_headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        let mut auth = HeaderValue::from_str(&format!("Basic {}", self.auth_token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}
