//! Named scenario presets that overlay a few parameters on the current trip.

use serde::Serialize;

use crate::params::{ParameterOverrides, SimulationParameters, SurgeZone};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    #[serde(rename = "params")]
    pub overrides: ParameterOverrides,
}

impl ScenarioPreset {
    /// Overlay this preset on `params`; fields the preset does not mention are kept.
    pub fn apply(&self, params: &SimulationParameters) -> SimulationParameters {
        self.overrides.apply(params)
    }
}

pub static PRESETS: [ScenarioPreset; 4] = [
    ScenarioPreset {
        id: "morning-rush",
        name: "Segunda de Manhã",
        description: "Horário de pico matinal",
        icon: "sunrise",
        overrides: ParameterOverrides {
            hour: Some(8),
            is_rush_hour: Some(true),
            traffic_intensity: Some(85.0),
            has_rain: Some(false),
            weather_severity: Some(0.0),
            ..ParameterOverrides::NONE
        },
    },
    ScenarioPreset {
        id: "friday-night-rain",
        name: "Sexta à Noite Chovendo",
        description: "Fim de semana com chuva",
        icon: "cloud-rain",
        overrides: ParameterOverrides {
            hour: Some(22),
            has_rain: Some(true),
            weather_severity: Some(70.0),
            traffic_intensity: Some(60.0),
            has_special_event: Some(true),
            ..ParameterOverrides::NONE
        },
    },
    ScenarioPreset {
        id: "holiday-event",
        name: "Feriado com Evento",
        description: "Evento especial em feriado",
        icon: "calendar",
        overrides: ParameterOverrides {
            is_holiday: Some(true),
            has_special_event: Some(true),
            surge_zone: Some(SurgeZone::High),
            traffic_intensity: Some(90.0),
            ..ParameterOverrides::NONE
        },
    },
    ScenarioPreset {
        id: "quiet-afternoon",
        name: "Tarde Tranquila",
        description: "Horário calmo",
        icon: "sun",
        overrides: ParameterOverrides {
            hour: Some(15),
            is_rush_hour: Some(false),
            traffic_intensity: Some(20.0),
            has_rain: Some(false),
            weather_severity: Some(0.0),
            ..ParameterOverrides::NONE
        },
    },
];

pub fn preset_by_id(id: &str) -> Option<&'static ScenarioPreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}
