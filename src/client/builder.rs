use crate::client::core::SpeechClient;
use crate::config::{self, ClientConfig};
use crate::transport::HttpTransport;
use crate::Result;
use std::time::Duration;

/// Builder for clients that need more than [`SpeechClient::new`].
///
/// Missing values fall back to the environment:
/// - `SPEECH_ENDPOINT_URL`
/// - `SPEECH_GATEWAY_TOKEN`
/// - `SPEECH_HTTP_TIMEOUT_SECS` (unset or `0` means no timeout)
pub struct SpeechClientBuilder {
    endpoint_url: Option<String>,
    gateway_token: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl SpeechClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint_url: None,
            gateway_token: None,
            timeout: None,
            http_client: None,
        }
    }

    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn gateway_token(mut self, token: impl Into<String>) -> Self {
        self.gateway_token = Some(token.into());
        self
    }

    /// Whole-request timeout. There is none unless set here or via env.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reuse an existing reqwest client. Its own timeout settings apply and
    /// [`timeout`](Self::timeout) is ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<SpeechClient> {
        let endpoint_url = match self.endpoint_url {
            Some(url) => url,
            None => config::required_env(config::ENDPOINT_URL_ENV)?,
        };
        let gateway_token = match self.gateway_token {
            Some(token) => token,
            None => config::required_env(config::GATEWAY_TOKEN_ENV)?,
        };
        let config = ClientConfig {
            endpoint_url,
            gateway_token,
            timeout: self.timeout.or_else(config::timeout_from_env),
        };

        let transport = match self.http_client {
            Some(client) => HttpTransport::with_client(client, &config),
            None => HttpTransport::new(&config)?,
        };
        Ok(SpeechClient { config, transport })
    }
}

impl Default for SpeechClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
