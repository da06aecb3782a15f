use serde::{Deserialize, Serialize};

/// Body of `POST /speechRecognition/v1/base64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64Request<'a> {
    pub language: &'a str,
    pub data: &'a str,
}

/// Body of `POST /speechRecognition/v1/link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest<'a> {
    pub language: &'a str,
    pub link: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn base64_body_shape() {
        let body = Base64Request {
            language: "fa",
            data: "UklGRg==",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"language": "fa", "data": "UklGRg=="})
        );
    }

    #[test]
    fn link_body_shape() {
        let body = LinkRequest {
            language: "en",
            link: "https://example.com/audio.mp3",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"language":"en","link":"https://example.com/audio.mp3"}"#
        );
    }
}
