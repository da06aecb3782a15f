use crate::client::Endpoint;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Request URL when one was built (e.g., "https://host/speechRecognition/v1/file")
    pub url: Option<String>,
    /// HTTP status of a non-2xx response
    pub status: Option<u16>,
    /// Layer that failed (e.g., "transport", "status", "decode", "filesystem", "url", "env")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            url: None,
            status: None,
            source: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the speech gateway client.
///
/// Every request operation fails with [`Error::Client`], whose message is
/// `"<operation prefix>: <underlying message>"`. Transient and permanent
/// failures are not distinguished; recovery is up to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {message}", .operation.error_prefix())]
    Client {
        operation: Endpoint,
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

/// Name used throughout the docs for the error produced by request operations.
pub type ClientError = Error;

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref url) = ctx.url {
        parts.push(format!("url: {}", url));
    }
    if let Some(status) = ctx.status {
        parts.push(format!("status: {}", status));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Renders an error and its source chain, skipping sources whose text is
/// already part of the rendered message.
pub(crate) fn chain_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut next = err.source();
    while let Some(source) = next {
        let text = source.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        next = source.source();
    }
    message
}

impl Error {
    /// Wrap a transport failure into the operation-specific client error.
    pub fn client(operation: Endpoint, err: TransportError) -> Self {
        let context = err.context();
        Error::Client {
            operation,
            message: chain_message(&err),
            context,
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// The operation that failed, for request errors.
    pub fn operation(&self) -> Option<Endpoint> {
        match self {
            Error::Client { operation, .. } => Some(*operation),
            Error::Configuration { .. } => None,
        }
    }

    /// HTTP status of the failed exchange, if the server answered.
    pub fn status(&self) -> Option<u16> {
        self.context().status
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Error::Client { context, .. } | Error::Configuration { context, .. } => context,
        }
    }
}
