use crate::client::builder::SpeechClientBuilder;
use crate::client::endpoint::{Endpoint, UploadKind};
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, TransportError};
use crate::types::{ApiResponse, Base64Request, LinkRequest};
use crate::{Error, Result};
use base64::Engine as _;
use std::future::Future;
use std::path::Path;

/// Client for the speech recognition gateway.
///
/// Every method performs exactly one HTTP request and either returns the
/// response envelope or fails with an [`Error::Client`] carrying the
/// operation's fixed prefix. There are no retries and no shared mutable
/// state, so one client can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: HttpTransport,
}

impl SpeechClient {
    /// Create a client. Both values are stored verbatim and not validated.
    pub fn new(endpoint_url: impl Into<String>, gateway_token: impl Into<String>) -> Self {
        let config = ClientConfig::new(endpoint_url, gateway_token);
        let transport = HttpTransport::with_client(reqwest::Client::new(), &config);
        Self { config, transport }
    }

    pub fn builder() -> SpeechClientBuilder {
        SpeechClientBuilder::new()
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.config.endpoint_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /speechRecognition/v1/base64` with `{ language, data }`.
    pub async fn send_file_as_base64(
        &self,
        language: &str,
        base64_data: &str,
    ) -> Result<ApiResponse> {
        let body = Base64Request {
            language,
            data: base64_data,
        };
        self.run(Endpoint::Base64, self.transport.post_json(Endpoint::Base64, &body))
            .await
    }

    /// Encode raw audio with the standard base64 alphabet and submit it
    /// through [`send_file_as_base64`](Self::send_file_as_base64).
    pub async fn send_bytes_as_base64(&self, language: &str, audio: &[u8]) -> Result<ApiResponse> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(audio);
        self.send_file_as_base64(language, &encoded).await
    }

    /// `POST /speechRecognition/v1/file` as multipart `language` + `file`.
    pub async fn send_file(
        &self,
        language: &str,
        file_path: impl AsRef<Path>,
    ) -> Result<ApiResponse> {
        self.upload(UploadKind::Standard, language, file_path.as_ref())
            .await
    }

    /// `POST /speechRecognition/v1/largeFile`, same form as [`send_file`](Self::send_file).
    pub async fn send_large_file(
        &self,
        language: &str,
        file_path: impl AsRef<Path>,
    ) -> Result<ApiResponse> {
        self.upload(UploadKind::Large, language, file_path.as_ref())
            .await
    }

    /// `GET /speechRecognition/v1/trackingText/{token}`.
    ///
    /// The token is percent-encoded as a single path segment, so the server
    /// sees it unchanged even when it contains `/`, `?` or `#`. The tokens
    /// `.` and `..` fail without a request being sent.
    pub async fn check_result(&self, token: &str) -> Result<ApiResponse> {
        self.run(Endpoint::TrackingText, self.transport.get_tracking(token))
            .await
    }

    /// `POST /speechRecognition/v1/link` with `{ language, link }`.
    pub async fn process_link(&self, language: &str, link: &str) -> Result<ApiResponse> {
        let body = LinkRequest { language, link };
        self.run(Endpoint::Link, self.transport.post_json(Endpoint::Link, &body))
            .await
    }

    async fn upload(&self, kind: UploadKind, language: &str, path: &Path) -> Result<ApiResponse> {
        let endpoint = kind.endpoint();
        self.run(endpoint, self.transport.post_file(endpoint, language, path))
            .await
    }

    /// Drive one exchange and wrap any failure with the operation prefix.
    async fn run<F>(&self, endpoint: Endpoint, exchange: F) -> Result<ApiResponse>
    where
        F: Future<Output = std::result::Result<ApiResponse, TransportError>>,
    {
        exchange.await.map_err(|e| Error::client(endpoint, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_config_verbatim() {
        let client = SpeechClient::new("https://api.example.com/", "tok123");
        assert_eq!(client.endpoint_url(), "https://api.example.com/");
        assert_eq!(client.config().gateway_token, "tok123");
        assert_eq!(client.config().timeout, None);
    }

    #[tokio::test]
    async fn missing_file_fails_before_any_request() {
        // Nothing listens here; an attempted request would report a connect error.
        let client = SpeechClient::new("http://127.0.0.1:1", "tok");
        let err = client
            .send_large_file("en", "/definitely/not/here.wav")
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Error sending large file: cannot open"), "{}", msg);
        assert_eq!(err.context().source.as_deref(), Some("filesystem"));
    }

    #[tokio::test]
    async fn invalid_endpoint_is_reported_per_operation() {
        let client = SpeechClient::new("not-a-url", "tok");
        let err = client.check_result("abc").await.unwrap_err();
        assert!(err.to_string().starts_with("Error checking result: invalid URL"));

        let err = client.process_link("en", "https://x/a.mp3").await.unwrap_err();
        assert!(err.to_string().starts_with("Error processing link: "));
        assert_eq!(err.operation(), Some(Endpoint::Link));
    }
}
