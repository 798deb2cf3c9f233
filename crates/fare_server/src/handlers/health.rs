use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

use super::{json_response, ApiResponse};

/// `GET /health`: liveness with wall-clock timestamp and process uptime in seconds.
pub fn health_response(uptime: Duration, now: DateTime<Utc>) -> ApiResponse {
    json_response(
        200,
        json!({
            "status": "ok",
            "timestamp": now.to_rfc3339_opts(SecondsFormat::Millis, true),
            "uptime": uptime.as_secs_f64(),
        }),
    )
}
