//! Gateway endpoints and their fixed request shapes.

use reqwest::Method;
use std::fmt;

/// One of the five speech gateway operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Base64,
    File,
    LargeFile,
    TrackingText,
    Link,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Base64,
        Endpoint::File,
        Endpoint::LargeFile,
        Endpoint::TrackingText,
        Endpoint::Link,
    ];

    pub fn method(&self) -> Method {
        match self {
            Endpoint::TrackingText => Method::GET,
            _ => Method::POST,
        }
    }

    /// Path relative to the endpoint URL. The tracking path takes the job
    /// token as one more segment.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Base64 => "/speechRecognition/v1/base64",
            Endpoint::File => "/speechRecognition/v1/file",
            Endpoint::LargeFile => "/speechRecognition/v1/largeFile",
            Endpoint::TrackingText => "/speechRecognition/v1/trackingText",
            Endpoint::Link => "/speechRecognition/v1/link",
        }
    }

    /// Prefix of every error message this operation produces.
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Endpoint::Base64 => "Error sending file as base64",
            Endpoint::File => "Error sending file",
            Endpoint::LargeFile => "Error sending large file",
            Endpoint::TrackingText => "Error checking result",
            Endpoint::Link => "Error processing link",
        }
    }

    /// Client method name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Base64 => "send_file_as_base64",
            Endpoint::File => "send_file",
            Endpoint::LargeFile => "send_large_file",
            Endpoint::TrackingText => "check_result",
            Endpoint::Link => "process_link",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Multipart upload variant. Both share one request shape and differ only in
/// the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Standard,
    Large,
}

impl UploadKind {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            UploadKind::Standard => Endpoint::File,
            UploadKind::Large => Endpoint::LargeFile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tracking_is_get() {
        for ep in Endpoint::ALL {
            let expected = if ep == Endpoint::TrackingText {
                Method::GET
            } else {
                Method::POST
            };
            assert_eq!(ep.method(), expected, "{}", ep);
        }
    }

    #[test]
    fn prefixes_are_distinct() {
        let mut prefixes: Vec<_> = Endpoint::ALL.iter().map(|e| e.error_prefix()).collect();
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), Endpoint::ALL.len());
    }

    #[test]
    fn upload_kinds_map_to_file_endpoints() {
        assert_eq!(UploadKind::Standard.endpoint().path(), "/speechRecognition/v1/file");
        assert_eq!(UploadKind::Large.endpoint().path(), "/speechRecognition/v1/largeFile");
    }
}
