pub mod health;
pub mod pricing;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Status code plus JSON body, independent of the HTTP framework.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Value,
}

pub(crate) fn success_response(status_code: u16, payload: impl Serialize) -> ApiResponse {
    match serde_json::to_value(payload) {
        Ok(body) => ApiResponse { status_code, body },
        Err(error) => {
            tracing::error!(%error, "failed to serialize response payload");
            internal_error_response()
        }
    }
}

pub(crate) fn json_response(status_code: u16, body: Value) -> ApiResponse {
    ApiResponse { status_code, body }
}

pub(crate) fn internal_error_response() -> ApiResponse {
    json_response(500, json!({ "error": "Internal server error" }))
}
