use serde_json::{Map, Value};

pub const FAILURE_STATUS: &str = "fail";

pub(crate) const GENERIC_FAILURE_MESSAGE: &str = "failure status with no error message";

/// Response envelope of the MoEngage data APIs, kept as untyped JSON.
/// Only the top-level `status` and the nested `error.message` are ever
/// interpreted. Everything else in the body is ignored.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    value: Map<String, Value>,
}

impl ApiResponse {
    pub fn from_slice(data: &[u8]) -> Result<ApiResponse, serde_json::Error> {
        let value = serde_json::from_slice::<Map<String, Value>>(data)?;
        Ok(ApiResponse { value })
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.value.get("status").and_then(Value::as_str) == Some(FAILURE_STATUS)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.value.get("error")?.get("message")?.as_str()
    }
}
