//! Trip and context parameters consumed by the pricing engine.

use serde::{Deserialize, Serialize};

/// Vehicle category; selects the row of the fare table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Economy,
    Comfort,
    Premium,
    Xl,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Economy,
        VehicleType::Comfort,
        VehicleType::Premium,
        VehicleType::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Comfort => "comfort",
            Self::Premium => "premium",
            Self::Xl => "xl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

/// Demand tier of the pickup area. Applied last, as a multiplier on everything before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurgeZone {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl SurgeZone {
    pub const ALL: [SurgeZone; 4] = [
        SurgeZone::None,
        SurgeZone::Low,
        SurgeZone::Medium,
        SurgeZone::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|zone| zone.as_str() == name)
    }

    /// Price multiplier for the zone. 1.0 for [`SurgeZone::None`].
    pub fn multiplier(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Low => 1.2,
            Self::Medium => 1.5,
            Self::High => 2.0,
        }
    }

    /// Tier name shown in the breakdown label; `None` when no surge applies.
    pub fn tier_label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Low => Some("Baixa"),
            Self::Medium => Some("Média"),
            Self::High => Some("Alta"),
        }
    }
}

/// Validated input to [`crate::pricing::compute_price`].
///
/// Ranges are enforced by [`crate::contract::validate_request`]; the engine
/// trusts whatever it is given. `is_rush_hour` is authoritative and is never
/// re-derived from `hour`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    /// Trip length in km, 0–100.
    pub distance: f64,
    pub vehicle_type: VehicleType,
    /// Hour of day, 0–23.
    pub hour: u8,
    pub is_rush_hour: bool,
    pub is_holiday: bool,
    pub has_rain: bool,
    /// Rain intensity in percent, 0–100.
    pub weather_severity: f64,
    /// Congestion in percent, 0–100.
    pub traffic_intensity: f64,
    pub has_special_event: bool,
    pub surge_zone: SurgeZone,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            distance: 10.0,
            vehicle_type: VehicleType::Economy,
            hour: 12,
            is_rush_hour: false,
            is_holiday: false,
            has_rain: false,
            weather_severity: 0.0,
            traffic_intensity: 30.0,
            has_special_event: false,
            surge_zone: SurgeZone::None,
        }
    }
}

/// Partial parameter set; present fields replace the base when applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_rush_hour: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_holiday: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_rain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_severity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_special_event: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge_zone: Option<SurgeZone>,
}

impl ParameterOverrides {
    /// No overrides; usable as a const base for struct update syntax.
    pub const NONE: ParameterOverrides = ParameterOverrides {
        distance: None,
        vehicle_type: None,
        hour: None,
        is_rush_hour: None,
        is_holiday: None,
        has_rain: None,
        weather_severity: None,
        traffic_intensity: None,
        has_special_event: None,
        surge_zone: None,
    };

    pub fn apply(&self, base: &SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            distance: self.distance.unwrap_or(base.distance),
            vehicle_type: self.vehicle_type.unwrap_or(base.vehicle_type),
            hour: self.hour.unwrap_or(base.hour),
            is_rush_hour: self.is_rush_hour.unwrap_or(base.is_rush_hour),
            is_holiday: self.is_holiday.unwrap_or(base.is_holiday),
            has_rain: self.has_rain.unwrap_or(base.has_rain),
            weather_severity: self.weather_severity.unwrap_or(base.weather_severity),
            traffic_intensity: self.traffic_intensity.unwrap_or(base.traffic_intensity),
            has_special_event: self.has_special_event.unwrap_or(base.has_special_event),
            surge_zone: self.surge_zone.unwrap_or(base.surge_zone),
        }
    }
}
