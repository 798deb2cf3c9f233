//! Side-by-side prices for the current trip with individual factors removed.

use serde::Serialize;

use crate::params::{ParameterOverrides, SimulationParameters, SurgeZone};
use crate::pricing::{compute_price, PriceResult};

/// Traffic level used by the "light traffic" and "base" variants; below the surcharge threshold.
pub const LIGHT_TRAFFIC_INTENSITY: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub label: &'static str,
    pub result: PriceResult,
}

const VARIANTS: [(&str, ParameterOverrides); 5] = [
    ("Atual", ParameterOverrides::NONE),
    (
        "Sem Pico",
        ParameterOverrides {
            is_rush_hour: Some(false),
            ..ParameterOverrides::NONE
        },
    ),
    (
        "Sem Chuva",
        ParameterOverrides {
            has_rain: Some(false),
            weather_severity: Some(0.0),
            ..ParameterOverrides::NONE
        },
    ),
    (
        "Trânsito Leve",
        ParameterOverrides {
            traffic_intensity: Some(LIGHT_TRAFFIC_INTENSITY),
            ..ParameterOverrides::NONE
        },
    ),
    (
        "Base",
        ParameterOverrides {
            is_rush_hour: Some(false),
            has_rain: Some(false),
            weather_severity: Some(0.0),
            traffic_intensity: Some(LIGHT_TRAFFIC_INTENSITY),
            has_special_event: Some(false),
            surge_zone: Some(SurgeZone::None),
            is_holiday: Some(false),
            ..ParameterOverrides::NONE
        },
    ),
];

/// Price the trip as given, then with rush hour, rain, heavy traffic, and all
/// demand factors removed. Hour (and so the night fare) is left untouched.
pub fn compare_scenarios(params: &SimulationParameters) -> Vec<ComparisonEntry> {
    VARIANTS
        .iter()
        .map(|&(label, overrides)| ComparisonEntry {
            label,
            result: compute_price(&overrides.apply(params)),
        })
        .collect()
}
