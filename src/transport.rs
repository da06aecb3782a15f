//! HTTP transport for the speech gateway.

pub mod http;

pub use http::{HttpTransport, GATEWAY_TOKEN_HEADER};

use crate::ErrorContext;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid URL: {0} cannot be a base")]
    CannotBeABase(String),

    /// `.` and `..` are removed by URL normalization in every encoding.
    #[error("invalid job token {0:?}: dot segments cannot be sent as a path segment")]
    DotSegmentToken(String),
}

impl TransportError {
    pub fn context(&self) -> ErrorContext {
        match self {
            TransportError::Http(e) => {
                let mut ctx = ErrorContext::new();
                if let Some(url) = e.url() {
                    ctx = ctx.with_url(url.as_str());
                }
                if let Some(status) = e.status() {
                    ctx = ctx.with_status(status.as_u16());
                }
                let source = if e.is_status() {
                    "status"
                } else if e.is_decode() {
                    "decode"
                } else {
                    "transport"
                };
                ctx.with_source(source)
            }
            TransportError::Open { .. } => ErrorContext::new().with_source("filesystem"),
            TransportError::Url(_)
            | TransportError::CannotBeABase(_)
            | TransportError::DotSegmentToken(_) => ErrorContext::new().with_source("url"),
        }
    }
}
