//! Request contract for price calculation.
//!
//! A [`PriceRequest`] is the raw JSON body. Every field is optional at the
//! serde level so that missing fields surface as violations next to range
//! errors rather than as an opaque parse failure. [`validate_request`] turns it
//! into [`SimulationParameters`] or reports every violated constraint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::{SimulationParameters, SurgeZone, VehicleType};

pub const MAX_DISTANCE_KM: f64 = 100.0;
pub const MAX_PERCENT: f64 = 100.0;
pub const MAX_HOUR: u8 = 23;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    pub distance: Option<f64>,
    pub vehicle_type: Option<String>,
    pub hour: Option<f64>,
    pub is_rush_hour: Option<bool>,
    pub is_holiday: Option<bool>,
    pub has_rain: Option<bool>,
    pub weather_severity: Option<f64>,
    pub traffic_intensity: Option<f64>,
    pub has_special_event: Option<bool>,
    pub surge_zone: Option<String>,
}

impl From<&SimulationParameters> for PriceRequest {
    fn from(params: &SimulationParameters) -> Self {
        Self {
            distance: Some(params.distance),
            vehicle_type: Some(params.vehicle_type.as_str().to_string()),
            hour: Some(f64::from(params.hour)),
            is_rush_hour: Some(params.is_rush_hour),
            is_holiday: Some(params.is_holiday),
            has_rain: Some(params.has_rain),
            weather_severity: Some(params.weather_severity),
            traffic_intensity: Some(params.traffic_intensity),
            has_special_event: Some(params.has_special_event),
            surge_zone: Some(params.surge_zone.as_str().to_string()),
        }
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, "is required")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid parameters: {}", describe(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{} {}", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Check every field of `request`, collecting all violations.
pub fn validate_request(request: PriceRequest) -> Result<SimulationParameters, ValidationError> {
    let mut violations = Vec::new();

    let distance = bounded(&mut violations, "distance", request.distance, MAX_DISTANCE_KM);
    let vehicle_type = variant(
        &mut violations,
        "vehicleType",
        request.vehicle_type.as_deref(),
        VehicleType::from_name,
        &VehicleType::ALL.map(VehicleType::as_str),
    );
    let hour = hour(&mut violations, request.hour);
    let is_rush_hour = required(&mut violations, "isRushHour", request.is_rush_hour);
    let is_holiday = required(&mut violations, "isHoliday", request.is_holiday);
    let has_rain = required(&mut violations, "hasRain", request.has_rain);
    let weather_severity = bounded(
        &mut violations,
        "weatherSeverity",
        request.weather_severity,
        MAX_PERCENT,
    );
    let traffic_intensity = bounded(
        &mut violations,
        "trafficIntensity",
        request.traffic_intensity,
        MAX_PERCENT,
    );
    let has_special_event = required(&mut violations, "hasSpecialEvent", request.has_special_event);
    let surge_zone = variant(
        &mut violations,
        "surgeZone",
        request.surge_zone.as_deref(),
        SurgeZone::from_name,
        &SurgeZone::ALL.map(SurgeZone::as_str),
    );

    let (
        Some(distance),
        Some(vehicle_type),
        Some(hour),
        Some(is_rush_hour),
        Some(is_holiday),
        Some(has_rain),
        Some(weather_severity),
        Some(traffic_intensity),
        Some(has_special_event),
        Some(surge_zone),
    ) = (
        distance,
        vehicle_type,
        hour,
        is_rush_hour,
        is_holiday,
        has_rain,
        weather_severity,
        traffic_intensity,
        has_special_event,
        surge_zone,
    )
    else {
        return Err(ValidationError::new(violations));
    };

    Ok(SimulationParameters {
        distance,
        vehicle_type,
        hour,
        is_rush_hour,
        is_holiday,
        has_rain,
        weather_severity,
        traffic_intensity,
        has_special_event,
        surge_zone,
    })
}

/// Decode a JSON body and validate it.
pub fn parse_and_validate(body: &[u8]) -> Result<SimulationParameters, ContractError> {
    let request: PriceRequest = serde_json::from_slice(body)?;
    Ok(validate_request(request)?)
}

fn required<T>(violations: &mut Vec<Violation>, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        violations.push(Violation::required(field));
    }
    value
}

fn bounded(violations: &mut Vec<Violation>, field: &str, value: Option<f64>, max: f64) -> Option<f64> {
    let value = required(violations, field, value)?;
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        violations.push(Violation::new(field, format!("must be between 0 and {max}")));
        return None;
    }
    Some(value)
}

fn hour(violations: &mut Vec<Violation>, value: Option<f64>) -> Option<u8> {
    let value = required(violations, "hour", value)?;
    if !value.is_finite() || value.fract() != 0.0 {
        violations.push(Violation::new("hour", "must be an integer"));
        return None;
    }
    if !(0.0..=f64::from(MAX_HOUR)).contains(&value) {
        violations.push(Violation::new("hour", format!("must be between 0 and {MAX_HOUR}")));
        return None;
    }
    Some(value as u8)
}

fn variant<T>(
    violations: &mut Vec<Violation>,
    field: &str,
    value: Option<&str>,
    parse: fn(&str) -> Option<T>,
    expected: &[&str],
) -> Option<T> {
    let name = required(violations, field, value)?;
    let parsed = parse(name);
    if parsed.is_none() {
        violations.push(Violation::new(
            field,
            format!("must be one of {}", expected.join(", ")),
        ));
    }
    parsed
}
