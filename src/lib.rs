//! # speech-gateway-client
//!
//! Async client for a speech recognition gateway.
//!
//! ## Overview
//!
//! The gateway exposes five endpoints, each wrapped by one method of
//! [`SpeechClient`]:
//!
//! | Method | Request |
//! |--------|---------|
//! | [`SpeechClient::send_file_as_base64`] | `POST /speechRecognition/v1/base64` (JSON) |
//! | [`SpeechClient::send_file`] | `POST /speechRecognition/v1/file` (multipart) |
//! | [`SpeechClient::send_large_file`] | `POST /speechRecognition/v1/largeFile` (multipart) |
//! | [`SpeechClient::check_result`] | `GET /speechRecognition/v1/trackingText/{token}` |
//! | [`SpeechClient::process_link`] | `POST /speechRecognition/v1/link` (JSON) |
//!
//! Every request carries the `gateway-token` header and every successful
//! response is an [`ApiResponse`] envelope (`data` + `meta`). Calls are
//! independent single-shot exchanges: no retries, no caching, no job tracking.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use speech_gateway_client::SpeechClient;
//!
//! #[tokio::main]
//! async fn main() -> speech_gateway_client::Result<()> {
//!     let client = SpeechClient::new("https://api.example.com", "gateway-token");
//!
//!     let submitted = client.send_file("fa", "recording.wav").await?;
//!     println!("request {}: {:?}", submitted.request_id(), submitted.data);
//!
//!     if let Some(token) = submitted.data_str("token") {
//!         let status = client.check_result(token).await?;
//!         println!("{:?}", status.data);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`SpeechClient`], its builder and the endpoint table |
//! | [`config`] | [`ClientConfig`] from code, environment or YAML |
//! | [`transport`] | reqwest-based HTTP exchanges |
//! | [`types`] | Request bodies and the response envelope |

pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use client::{Endpoint, SpeechClient, SpeechClientBuilder, UploadKind};
pub use config::ClientConfig;
pub use types::{ApiResponse, ResponseMeta};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ClientError, Error, ErrorContext};

pub mod prelude {
    pub use crate::client::{SpeechClient, SpeechClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{ClientError, Error};
    pub use crate::types::ApiResponse;
    pub use crate::Result;
}
