//! Surcharge rules.
//!
//! Each rule looks at the parameters and the running total accumulated by the
//! rules before it, and either emits a breakdown line (whose `value` is added
//! to the total) or nothing. Order matters: every surcharge is proportional to
//! the total as it stands when the rule runs.

use serde::{Deserialize, Serialize};

use super::fare_table::VehicleFare;
use super::result::{Impact, PriceBreakdownItem};
use crate::params::SimulationParameters;

pub const RUSH_HOUR_RATE: f64 = 0.35;
pub const RUSH_HOUR_MULTIPLIER: f64 = 1.35;

/// Night fare applies for `hour < NIGHT_END_HOUR`.
pub const NIGHT_END_HOUR: u8 = 6;
pub const NIGHT_RATE: f64 = 0.20;
pub const NIGHT_MULTIPLIER: f64 = 1.20;

pub const HOLIDAY_RATE: f64 = 0.25;
pub const HOLIDAY_MULTIPLIER: f64 = 1.25;

/// Surcharge at 100% rain severity; scales linearly below that.
pub const RAIN_MAX_RATE: f64 = 0.4;
pub const RAIN_HIGH_IMPACT_SEVERITY: f64 = 60.0;

/// Traffic intensity at or below this adds nothing.
pub const TRAFFIC_THRESHOLD: f64 = 30.0;
pub const TRAFFIC_RATE: f64 = 0.5;
pub const TRAFFIC_HIGH_IMPACT_INTENSITY: f64 = 70.0;

pub const SPECIAL_EVENT_RATE: f64 = 0.30;
pub const SPECIAL_EVENT_MULTIPLIER: f64 = 1.30;

/// Identifies a pricing step, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    BaseDistance,
    RushHour,
    Night,
    Holiday,
    Rain,
    Traffic,
    SpecialEvent,
    SurgeZone,
}

/// `(params, running_total) -> line to add`, or `None` when the condition does not hold.
pub type SurchargeRule = fn(&SimulationParameters, f64) -> Option<PriceBreakdownItem>;

/// The optional rules in evaluation order.
pub const SURCHARGE_RULES: [(RuleKind, SurchargeRule); 7] = [
    (RuleKind::RushHour, rush_hour),
    (RuleKind::Night, night),
    (RuleKind::Holiday, holiday),
    (RuleKind::Rain, rain),
    (RuleKind::Traffic, traffic),
    (RuleKind::SpecialEvent, special_event),
    (RuleKind::SurgeZone, surge_zone),
];

/// Base fare and distance lines. Always emitted.
pub fn base_items(params: &SimulationParameters, fare: &VehicleFare) -> [PriceBreakdownItem; 2] {
    let distance_impact = if params.distance > 20.0 {
        Impact::High
    } else if params.distance > 10.0 {
        Impact::Medium
    } else {
        Impact::Low
    };

    [
        PriceBreakdownItem::flat("Tarifa Base", fare.base_fare, Impact::Medium),
        PriceBreakdownItem::flat(
            format!("Distância ({} km)", params.distance),
            fare.distance_cost(params.distance),
            distance_impact,
        ),
    ]
}

/// Caller-supplied flag; `hour` is not consulted.
pub fn rush_hour(params: &SimulationParameters, running_total: f64) -> Option<PriceBreakdownItem> {
    params.is_rush_hour.then(|| {
        PriceBreakdownItem::surcharge(
            "Horário de Pico",
            running_total * RUSH_HOUR_RATE,
            RUSH_HOUR_MULTIPLIER,
            Impact::High,
        )
    })
}

pub fn night(params: &SimulationParameters, running_total: f64) -> Option<PriceBreakdownItem> {
    (params.hour < NIGHT_END_HOUR).then(|| {
        PriceBreakdownItem::surcharge(
            "Tarifa Noturna",
            running_total * NIGHT_RATE,
            NIGHT_MULTIPLIER,
            Impact::Medium,
        )
    })
}

pub fn holiday(params: &SimulationParameters, running_total: f64) -> Option<PriceBreakdownItem> {
    params.is_holiday.then(|| {
        PriceBreakdownItem::surcharge(
            "Feriado",
            running_total * HOLIDAY_RATE,
            HOLIDAY_MULTIPLIER,
            Impact::High,
        )
    })
}

pub fn rain(params: &SimulationParameters, running_total: f64) -> Option<PriceBreakdownItem> {
    if !params.has_rain || params.weather_severity <= 0.0 {
        return None;
    }

    let multiplier = 1.0 + (params.weather_severity / 100.0) * RAIN_MAX_RATE;
    let impact = if params.weather_severity > RAIN_HIGH_IMPACT_SEVERITY {
        Impact::High
    } else {
        Impact::Medium
    };

    Some(PriceBreakdownItem::surcharge(
        format!("Chuva ({}% intensidade)", params.weather_severity),
        running_total * (multiplier - 1.0),
        multiplier,
        impact,
    ))
}

pub fn traffic(params: &SimulationParameters, running_total: f64) -> Option<PriceBreakdownItem> {
    if params.traffic_intensity <= TRAFFIC_THRESHOLD {
        return None;
    }

    let multiplier = 1.0 + ((params.traffic_intensity - TRAFFIC_THRESHOLD) / 100.0) * TRAFFIC_RATE;
    let impact = if params.traffic_intensity > TRAFFIC_HIGH_IMPACT_INTENSITY {
        Impact::High
    } else {
        Impact::Medium
    };

    Some(PriceBreakdownItem::surcharge(
        format!("Trânsito Intenso ({}%)", params.traffic_intensity),
        running_total * (multiplier - 1.0),
        multiplier,
        impact,
    ))
}

pub fn special_event(params: &SimulationParameters, running_total: f64) -> Option<PriceBreakdownItem> {
    params.has_special_event.then(|| {
        PriceBreakdownItem::surcharge(
            "Evento Especial na Região",
            running_total * SPECIAL_EVENT_RATE,
            SPECIAL_EVENT_MULTIPLIER,
            Impact::High,
        )
    })
}

pub fn surge_zone(params: &SimulationParameters, running_total: f64) -> Option<PriceBreakdownItem> {
    let tier = params.surge_zone.tier_label()?;
    let multiplier = params.surge_zone.multiplier();

    Some(PriceBreakdownItem::surcharge(
        format!("Tarifa Dinâmica - Zona {tier}"),
        running_total * (multiplier - 1.0),
        multiplier,
        Impact::High,
    ))
}
