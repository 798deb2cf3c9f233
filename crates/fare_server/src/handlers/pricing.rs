use fare_core::comparison::compare_scenarios;
use fare_core::contract::{parse_and_validate, ContractError, Violation};
use fare_core::params::SimulationParameters;
use fare_core::pricing::{compute_price, trace_price};
use fare_core::scenario::PRESETS;
use serde_json::json;

use super::{json_response, success_response, ApiResponse};

/// `POST /api/calculate-price`
pub fn handle_calculate_price(body: &[u8]) -> ApiResponse {
    with_validated_params(body, |params| {
        let result = compute_price(params);
        tracing::info!(
            vehicle_type = params.vehicle_type.as_str(),
            total_price = result.total_price,
            rules_applied = result.surcharges().len(),
            "price calculated"
        );
        success_response(200, result)
    })
}

/// `POST /api/compare`
pub fn handle_compare(body: &[u8]) -> ApiResponse {
    with_validated_params(body, |params| success_response(200, compare_scenarios(params)))
}

/// `POST /api/price-trace`
pub fn handle_price_trace(body: &[u8]) -> ApiResponse {
    with_validated_params(body, |params| success_response(200, trace_price(params)))
}

/// `GET /api/presets`
pub fn list_presets() -> ApiResponse {
    success_response(200, &PRESETS)
}

fn with_validated_params(
    body: &[u8],
    respond: impl FnOnce(&SimulationParameters) -> ApiResponse,
) -> ApiResponse {
    match parse_and_validate(body) {
        Ok(params) => respond(&params),
        Err(error) => validation_error_response(error),
    }
}

fn validation_error_response(error: ContractError) -> ApiResponse {
    tracing::warn!(%error, "rejected price request");
    let details = match error {
        ContractError::Malformed(error) => vec![Violation::new("body", error.to_string())],
        ContractError::Invalid(error) => error.into_violations(),
    };
    json_response(400, json!({ "error": "Invalid parameters", "details": details }))
}
