//! Fare calculation: base fare plus distance, then the surcharge rules in order.
//!
//! Formula: `total = (base_fare + distance * per_km_rate)`, then for each rule
//! whose condition holds, `total += total * rate`. Rounding happens only on the
//! output fields.

mod fare_table;
mod result;
mod rules;
pub mod trace;

pub use fare_table::{VehicleFare, COMFORT_FARE, ECONOMY_FARE, PREMIUM_FARE, XL_FARE};
pub use result::{Impact, PriceBreakdownItem, PriceResult};
pub use rules::{
    base_items, holiday, night, rain, rush_hour, special_event, surge_zone, traffic, RuleKind,
    SurchargeRule, HOLIDAY_RATE, NIGHT_END_HOUR, NIGHT_RATE, RAIN_MAX_RATE, RUSH_HOUR_RATE,
    SPECIAL_EVENT_RATE, SURCHARGE_RULES, TRAFFIC_RATE, TRAFFIC_THRESHOLD,
};
pub use trace::{trace_price, RuleStep};

use crate::params::SimulationParameters;

/// Compute the total price and itemized breakdown for a trip.
///
/// Pure and infallible: the input is assumed to be validated. The running
/// total is folded through [`SURCHARGE_RULES`]; each rule that fires appends
/// one breakdown line and adds its value to the total.
pub fn compute_price(params: &SimulationParameters) -> PriceResult {
    let fare = params.vehicle_type.fare();
    let base_total = fare.base_fare + fare.distance_cost(params.distance);

    let (total_price, breakdown) = SURCHARGE_RULES.iter().fold(
        (base_total, base_items(params, &fare).to_vec()),
        |(running_total, mut breakdown), (_, rule)| match rule(params, running_total) {
            Some(item) => {
                let next_total = running_total + item.value;
                breakdown.push(item);
                (next_total, breakdown)
            }
            None => (running_total, breakdown),
        },
    );

    let percentage_change = ((total_price - base_total) / base_total) * 100.0;

    PriceResult {
        total_price: round2(total_price),
        base_fare: round2(base_total),
        breakdown,
        surge_multiplier: params.surge_zone.multiplier(),
        percentage_change: round1(percentage_change),
    }
}

/// Round to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SurgeZone, VehicleType};

    #[test]
    fn quiet_trip_is_base_plus_distance() {
        let result = compute_price(&SimulationParameters::default());
        assert_eq!(result.total_price, 2300.0);
        assert_eq!(result.base_fare, 2300.0);
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.surge_multiplier, 1.0);
        assert_eq!(result.percentage_change, 0.0);
        assert!(result.surcharges().is_empty());
    }

    #[test]
    fn surcharges_compound_on_running_total() {
        let params = SimulationParameters {
            is_rush_hour: true,
            is_holiday: true,
            ..SimulationParameters::default()
        };
        let result = compute_price(&params);

        // 2300 -> +805 (rush) -> 3105 -> +776.25 (holiday) -> 3881.25
        assert_eq!(result.breakdown.len(), 4);
        assert!((result.breakdown[2].value - 805.0).abs() < 1e-9);
        assert!((result.breakdown[3].value - 776.25).abs() < 1e-9);
        assert_eq!(result.total_price, 3881.25);
        assert_eq!(result.percentage_change, 68.8);
    }

    #[test]
    fn surge_multiplier_reports_zone() {
        let params = SimulationParameters {
            surge_zone: SurgeZone::Low,
            vehicle_type: VehicleType::Xl,
            distance: 5.0,
            ..SimulationParameters::default()
        };
        let result = compute_price(&params);
        // (1000 + 5 * 280) * 1.2
        assert_eq!(result.base_fare, 2400.0);
        assert_eq!(result.total_price, 2880.0);
        assert_eq!(result.surge_multiplier, 1.2);
        assert_eq!(result.percentage_change, 20.0);
    }

    #[test]
    fn rounding_is_applied_to_outputs_only() {
        let params = SimulationParameters {
            distance: 3.333,
            traffic_intensity: 47.0,
            ..SimulationParameters::default()
        };
        let result = compute_price(&params);

        let raw_base = 500.0 + 3.333 * 180.0;
        let raw_total = raw_base + raw_base * ((1.0 + (17.0 / 100.0) * 0.5) - 1.0);
        assert_eq!(result.base_fare, round2(raw_base));
        assert_eq!(result.total_price, round2(raw_total));
        assert_eq!(result.breakdown[2].value, raw_base * ((1.0 + (17.0 / 100.0) * 0.5) - 1.0));
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(2300.0), 2300.0);
        assert_eq!(round1(35.000_000_000_01), 35.0);
        assert_eq!(round1(68.75), 68.8);
    }
}
