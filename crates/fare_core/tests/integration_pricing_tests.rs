use fare_core::params::{SimulationParameters, SurgeZone, VehicleType};
use fare_core::pricing::{compute_price, round2, Impact};

fn scenario_a() -> SimulationParameters {
    SimulationParameters {
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

fn scenario_c() -> SimulationParameters {
    SimulationParameters {
        distance: 0.0,
        vehicle_type: VehicleType::Premium,
        hour: 2,
        is_rush_hour: false,
        is_holiday: true,
        has_rain: true,
        weather_severity: 100.0,
        traffic_intensity: 100.0,
        has_special_event: true,
        surge_zone: SurgeZone::High,
    }
}

#[test]
fn scenario_a_quiet_midday_economy() {
    let result = compute_price(&scenario_a());

    assert_eq!(result.total_price, 2300.0);
    assert_eq!(result.base_fare, 2300.0);
    assert_eq!(result.breakdown.len(), 2);
    assert_eq!(result.breakdown[0].label, "Tarifa Base");
    assert_eq!(result.breakdown[0].value, 500.0);
    assert_eq!(result.breakdown[0].impact, Impact::Medium);
    assert_eq!(result.breakdown[1].label, "Distância (10 km)");
    assert_eq!(result.breakdown[1].value, 1800.0);
    assert_eq!(result.surge_multiplier, 1.0);
    assert_eq!(result.percentage_change, 0.0);
}

#[test]
fn scenario_b_rush_hour_adds_thirty_five_percent() {
    let params = SimulationParameters {
        is_rush_hour: true,
        ..scenario_a()
    };
    let result = compute_price(&params);

    assert_eq!(result.breakdown.len(), 3);
    let rush = &result.breakdown[2];
    assert_eq!(rush.label, "Horário de Pico");
    assert!((rush.value - 805.0).abs() < 1e-9);
    assert_eq!(rush.multiplier, Some(1.35));
    assert_eq!(rush.impact, Impact::High);
    assert_eq!(result.total_price, 3105.0);
    assert_eq!(result.base_fare, 2300.0);
    assert_eq!(result.percentage_change, 35.0);
}

#[test]
fn scenario_c_compounds_every_rule_in_order() {
    let result = compute_price(&scenario_c());

    // Each rule applies to the total left by the one before it.
    let mut ordered = 1200.0_f64;
    ordered += ordered * 0.20;
    ordered += ordered * 0.25;
    ordered += ordered * ((1.0 + (100.0 / 100.0) * 0.4) - 1.0);
    ordered += ordered * ((1.0 + ((100.0 - 30.0) / 100.0) * 0.5) - 1.0);
    ordered += ordered * 0.30;
    ordered += ordered * (2.0 - 1.0);

    assert_eq!(result.total_price, round2(ordered));
    assert!((result.total_price - 8845.2).abs() < 1e-9);
    assert_eq!(result.base_fare, 1200.0);
    assert_eq!(result.surge_multiplier, 2.0);
    assert_eq!(result.percentage_change, 637.1);

    let labels: Vec<&str> = result.breakdown.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Tarifa Base",
            "Distância (0 km)",
            "Tarifa Noturna",
            "Feriado",
            "Chuva (100% intensidade)",
            "Trânsito Intenso (100%)",
            "Evento Especial na Região",
            "Tarifa Dinâmica - Zona Alta",
        ]
    );
    assert_eq!(result.breakdown[1].impact, Impact::Low);
}

#[test]
fn total_equals_base_plus_surcharge_values() {
    let result = compute_price(&scenario_c());
    let surcharge_sum: f64 = result.surcharges().iter().map(|item| item.value).sum();
    assert!((result.total_price - (result.base_fare + surcharge_sum)).abs() < 0.005);
}

#[test]
fn identical_input_gives_identical_output() {
    let params = scenario_c();
    let first = compute_price(&params);
    let second = compute_price(&params);
    assert_eq!(first, second);
    assert_eq!(first.total_price.to_bits(), second.total_price.to_bits());
}

#[test]
fn total_never_below_base_for_any_vehicle() {
    for vehicle_type in VehicleType::ALL {
        for surge_zone in SurgeZone::ALL {
            for hour in [0_u8, 5, 6, 8, 12, 18, 23] {
                let params = SimulationParameters {
                    vehicle_type,
                    surge_zone,
                    hour,
                    distance: 42.0,
                    has_rain: true,
                    weather_severity: 35.0,
                    traffic_intensity: 55.0,
                    ..scenario_a()
                };
                let result = compute_price(&params);
                assert!(result.total_price >= result.base_fare);
                assert!(result.base_fare >= 0.0);
                assert!(result.percentage_change >= 0.0);
            }
        }
    }
}

#[test]
fn breakdown_has_one_line_per_satisfied_condition() {
    let flags = [false, true];
    for is_rush_hour in flags {
        for is_holiday in flags {
            for has_rain in flags {
                for has_special_event in flags {
                    let params = SimulationParameters {
                        is_rush_hour,
                        is_holiday,
                        has_rain,
                        weather_severity: 50.0,
                        has_special_event,
                        hour: 4,
                        traffic_intensity: 75.0,
                        surge_zone: SurgeZone::Low,
                        ..scenario_a()
                    };
                    // Night, traffic and surge are always on for this trip.
                    let satisfied = [is_rush_hour, is_holiday, has_rain, has_special_event]
                        .iter()
                        .filter(|active| **active)
                        .count()
                        + 3;
                    let result = compute_price(&params);
                    assert_eq!(result.breakdown.len(), 2 + satisfied);
                }
            }
        }
    }
}

#[test]
fn longer_trips_cost_more() {
    let mut previous = f64::MIN;
    for distance in [0.0, 0.5, 1.0, 10.0, 10.5, 50.0, 99.9, 100.0] {
        let params = SimulationParameters {
            distance,
            is_rush_hour: true,
            ..scenario_a()
        };
        let total = compute_price(&params).total_price;
        assert!(total > previous, "distance {distance} should raise the price");
        previous = total;
    }
}

#[test]
fn heavier_rain_costs_more() {
    let mut previous = compute_price(&scenario_a()).total_price;
    for weather_severity in [1.0, 10.0, 33.0, 60.0, 61.0, 99.0, 100.0] {
        let params = SimulationParameters {
            has_rain: true,
            weather_severity,
            ..scenario_a()
        };
        let total = compute_price(&params).total_price;
        assert!(total > previous, "severity {weather_severity} should raise the price");
        previous = total;
    }
}

#[test]
fn heavier_traffic_above_threshold_costs_more() {
    let mut previous = compute_price(&scenario_a()).total_price;
    for traffic_intensity in [31.0, 40.0, 70.0, 71.0, 100.0] {
        let params = SimulationParameters {
            traffic_intensity,
            ..scenario_a()
        };
        let total = compute_price(&params).total_price;
        assert!(total > previous, "intensity {traffic_intensity} should raise the price");
        previous = total;
    }
}

#[test]
fn traffic_boundary_at_thirty() {
    let at_threshold = compute_price(&SimulationParameters {
        traffic_intensity: 30.0,
        ..scenario_a()
    });
    assert_eq!(at_threshold.breakdown.len(), 2);

    let above = compute_price(&SimulationParameters {
        traffic_intensity: 31.0,
        ..scenario_a()
    });
    assert_eq!(above.breakdown.len(), 3);
    assert_eq!(above.breakdown[2].multiplier, Some(1.0 + (1.0 / 100.0) * 0.5));
    assert!((above.breakdown[2].multiplier.unwrap_or_default() - 1.005).abs() < 1e-12);
}

#[test]
fn night_boundary_at_six() {
    let at_six = compute_price(&SimulationParameters {
        hour: 6,
        ..scenario_a()
    });
    assert_eq!(at_six.breakdown.len(), 2);

    let at_five = compute_price(&SimulationParameters {
        hour: 5,
        ..scenario_a()
    });
    assert_eq!(at_five.breakdown.len(), 3);
    assert_eq!(at_five.breakdown[2].label, "Tarifa Noturna");
    assert_eq!(at_five.total_price, 2760.0);
}

#[test]
fn rain_without_severity_is_free() {
    let result = compute_price(&SimulationParameters {
        has_rain: true,
        weather_severity: 0.0,
        ..scenario_a()
    });
    assert_eq!(result.breakdown.len(), 2);
    assert_eq!(result.total_price, 2300.0);
}

#[test]
fn rush_hour_flag_is_independent_of_hour() {
    let flagged_at_night = compute_price(&SimulationParameters {
        hour: 3,
        is_rush_hour: true,
        ..scenario_a()
    });
    let labels: Vec<&str> = flagged_at_night
        .breakdown
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels[2..], ["Horário de Pico", "Tarifa Noturna"]);

    let unflagged_in_rush_window = compute_price(&SimulationParameters {
        hour: 8,
        is_rush_hour: false,
        ..scenario_a()
    });
    assert_eq!(unflagged_in_rush_window.breakdown.len(), 2);
}

#[test]
fn result_serializes_with_wire_names() {
    let result = compute_price(&SimulationParameters {
        surge_zone: SurgeZone::Medium,
        ..scenario_a()
    });
    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["totalPrice"], 3450.0);
    assert_eq!(json["baseFare"], 2300.0);
    assert_eq!(json["surgeMultiplier"], 1.5);
    assert_eq!(json["percentageChange"], 50.0);
    assert!(json["breakdown"][0].get("multiplier").is_none());
    assert_eq!(json["breakdown"][2]["multiplier"], 1.5);
    assert_eq!(json["breakdown"][2]["impact"], "high");
    assert_eq!(json["breakdown"][2]["label"], "Tarifa Dinâmica - Zona Média");
}
