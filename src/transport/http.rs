use crate::client::Endpoint;
use crate::config::ClientConfig;
use crate::transport::TransportError;
use crate::types::ApiResponse;
use crate::{Error, ErrorContext, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, RequestBuilder};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tokio_util::io::ReaderStream;
use tracing::debug;
use url::Url;

pub const GATEWAY_TOKEN_HEADER: &str = "gateway-token";

const UPLOAD_MIME: &str = "application/octet-stream";

/// Single-shot HTTP exchanges against the speech gateway.
///
/// Every request carries the `gateway-token` header. Non-2xx statuses and
/// bodies that are not an [`ApiResponse`] envelope are failures.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint_url: String,
    gateway_token: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to create HTTP client: {}", e),
                ErrorContext::new().with_source("transport"),
            )
        })?;
        Ok(Self::with_client(client, config))
    }

    /// Use a caller-provided reqwest client (shared pools, proxies, custom TLS).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
            gateway_token: config.gateway_token.clone(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// `{endpoint_url}{path}`, concatenated verbatim.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.endpoint_url, endpoint.path())
    }

    /// Tracking URL with `token` appended as a single percent-encoded segment.
    ///
    /// Tokens `.` and `..` are rejected: URL parsing resolves them (and their
    /// `%2E` forms) as dot segments, so they could only ever reach the server
    /// as a different path.
    pub fn tracking_url(&self, token: &str) -> std::result::Result<Url, TransportError> {
        if token == "." || token == ".." {
            return Err(TransportError::DotSegmentToken(token.to_string()));
        }
        let mut url = Url::parse(&self.url_for(Endpoint::TrackingText))?;
        url.path_segments_mut()
            .map_err(|_| TransportError::CannotBeABase(self.endpoint_url.clone()))?
            .pop_if_empty()
            .push(token);
        Ok(url)
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &T,
    ) -> std::result::Result<ApiResponse, TransportError> {
        let url = self.url_for(endpoint);
        debug!(operation = endpoint.name(), url = %url, "sending JSON request");
        self.send(self.client.post(&url).json(body)).await
    }

    /// `GET` on the tracking endpoint for `token`, without a body.
    pub async fn get_tracking(
        &self,
        token: &str,
    ) -> std::result::Result<ApiResponse, TransportError> {
        let url = self.tracking_url(token)?;
        debug!(
            operation = Endpoint::TrackingText.name(),
            url = %url,
            "sending GET request"
        );
        self.send(self.client.get(url)).await
    }

    /// Multipart upload with fields `language` and `file`.
    ///
    /// The file is opened here and moved into the request body, so the handle
    /// lives exactly as long as the exchange and is closed on every exit path.
    pub async fn post_file(
        &self,
        endpoint: Endpoint,
        language: &str,
        path: &Path,
    ) -> std::result::Result<ApiResponse, TransportError> {
        let open_err = |source| TransportError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = tokio::fs::File::open(path).await.map_err(open_err)?;
        let length = file.metadata().await.map_err(open_err)?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let part = Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), length)
            .file_name(file_name)
            .mime_str(UPLOAD_MIME)?;
        let form = Form::new()
            .text("language", language.to_string())
            .part("file", part);

        let url = self.url_for(endpoint);
        debug!(
            operation = endpoint.name(),
            url = %url,
            bytes = length,
            "sending multipart upload"
        );
        self.send(self.client.post(&url).multipart(form)).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<ApiResponse, TransportError> {
        let response = request
            .header(GATEWAY_TOKEN_HEADER, &self.gateway_token)
            .send()
            .await?
            .error_for_status()?;
        let status = response.status();
        let envelope = response.json::<ApiResponse>().await?;
        debug!(
            status = status.as_u16(),
            request_id = %envelope.meta.request_id,
            "speech gateway responded"
        );
        Ok(envelope)
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint_url", &self.endpoint_url)
            .field("gateway_token", &"<redacted>")
            .finish()
    }
}
