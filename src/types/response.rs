use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope shared by all endpoints.
///
/// `data` is endpoint specific and passed through untouched. Fields the
/// client does not model are kept in `extra`, so serializing the value
/// reproduces the body the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub data: Map<String, Value>,
    pub meta: ResponseMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub request_id: String,
    /// Solar Hijri date, e.g. `1402-01-01`.
    pub shamsi_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    pub fn request_id(&self) -> &str {
        &self.meta.request_id
    }

    pub fn shamsi_date(&self) -> &str {
        &self.meta.shamsi_date
    }

    /// String value of a `data` field, e.g. the job token of a submission.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_round_trips_without_loss() {
        let body = json!({
            "data": {"token": "abc", "status": {"progress": 40}},
            "meta": {"requestId": "r1", "shamsiDate": "1402-01-01", "node": "n3"},
            "traceId": "t-9"
        });
        let resp: ApiResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resp.request_id(), "r1");
        assert_eq!(resp.shamsi_date(), "1402-01-01");
        assert_eq!(resp.data_str("token"), Some("abc"));
        assert_eq!(resp.data_str("status"), None);
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
    }

    #[test]
    fn missing_meta_is_rejected() {
        let err = serde_json::from_value::<ApiResponse>(json!({"data": {}})).unwrap_err();
        assert!(err.to_string().contains("meta"));
    }
}
