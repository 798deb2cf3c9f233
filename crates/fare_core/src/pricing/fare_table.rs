//! Per-vehicle base fare and per-kilometer rate.
//!
//! Amounts are currency agnostic; callers decide whether they are minor units
//! or whole currency.

use crate::params::VehicleType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleFare {
    /// Flat amount charged for every trip.
    pub base_fare: f64,
    /// Amount charged per kilometer.
    pub per_km_rate: f64,
}

pub const ECONOMY_FARE: VehicleFare = VehicleFare {
    base_fare: 500.0,
    per_km_rate: 180.0,
};

pub const COMFORT_FARE: VehicleFare = VehicleFare {
    base_fare: 800.0,
    per_km_rate: 250.0,
};

pub const PREMIUM_FARE: VehicleFare = VehicleFare {
    base_fare: 1200.0,
    per_km_rate: 380.0,
};

pub const XL_FARE: VehicleFare = VehicleFare {
    base_fare: 1000.0,
    per_km_rate: 280.0,
};

impl VehicleFare {
    /// Distance component of the fare: `distance_km * per_km_rate`.
    pub fn distance_cost(&self, distance_km: f64) -> f64 {
        distance_km * self.per_km_rate
    }
}

impl VehicleType {
    pub const fn fare(self) -> VehicleFare {
        match self {
            VehicleType::Economy => ECONOMY_FARE,
            VehicleType::Comfort => COMFORT_FARE,
            VehicleType::Premium => PREMIUM_FARE,
            VehicleType::Xl => XL_FARE,
        }
    }
}
