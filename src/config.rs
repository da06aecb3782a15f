//! Client configuration
//!
//! Holds the gateway endpoint and token. Values are stored verbatim; nothing
//! is validated until a request is made.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const ENDPOINT_URL_ENV: &str = "SPEECH_ENDPOINT_URL";
pub const GATEWAY_TOKEN_ENV: &str = "SPEECH_GATEWAY_TOKEN";
pub const TIMEOUT_SECS_ENV: &str = "SPEECH_HTTP_TIMEOUT_SECS";

/// Immutable client configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint_url: String,
    pub gateway_token: String,
    /// Whole-request timeout. `None` means the request may wait indefinitely.
    #[serde(
        default,
        rename = "timeout_secs",
        with = "timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(endpoint_url: impl Into<String>, gateway_token: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            gateway_token: gateway_token.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from `SPEECH_ENDPOINT_URL`, `SPEECH_GATEWAY_TOKEN`
    /// and the optional `SPEECH_HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let endpoint_url = required_env(ENDPOINT_URL_ENV)?;
        let gateway_token = required_env(GATEWAY_TOKEN_ENV)?;
        Ok(Self {
            endpoint_url,
            gateway_token,
            timeout: timeout_from_env(),
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid client config: {}", e),
                ErrorContext::new().with_source("yaml"),
            )
        })
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to read {}: {}", path.display(), e),
                ErrorContext::new().with_source("filesystem"),
            )
        })?;
        Self::from_yaml_str(&content)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("gateway_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub(crate) fn required_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| {
        Error::configuration_with_context(
            format!("{} is not set", name),
            ErrorContext::new().with_source("env"),
        )
    })
}

/// Zero or unparsable values mean no timeout.
pub(crate) fn timeout_from_env() -> Option<Duration> {
    std::env::var(TIMEOUT_SECS_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

mod timeout_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.filter(|s| *s > 0).map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_config_with_timeout() {
        let cfg = ClientConfig::from_yaml_str(
            "endpoint_url: https://api.example.com\ngateway_token: tok123\ntimeout_secs: 15\n",
        )
        .unwrap();
        assert_eq!(cfg.endpoint_url, "https://api.example.com");
        assert_eq!(cfg.gateway_token, "tok123");
        assert_eq!(cfg.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn yaml_config_without_timeout() {
        let cfg = ClientConfig::from_yaml_str(
            "endpoint_url: http://localhost:8080\ngateway_token: abc\n",
        )
        .unwrap();
        assert_eq!(cfg.timeout, None);
    }

    #[test]
    fn yaml_config_missing_token_is_configuration_error() {
        let err = ClientConfig::from_yaml_str("endpoint_url: http://localhost\n").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("gateway_token"));
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = ClientConfig::new("https://api.example.com", "secret-token");
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn values_are_stored_verbatim() {
        let cfg = ClientConfig::new("not a url/", " tok ");
        assert_eq!(cfg.endpoint_url, "not a url/");
        assert_eq!(cfg.gateway_token, " tok ");
    }
}
