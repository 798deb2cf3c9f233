//! Fare pricing engine for the surge pricing simulator.
//!
//! This crate owns the vehicle fare table, the ordered surcharge rules and the
//! request contract that guards them. It performs no I/O; the HTTP surface
//! lives in `crates/fare_server`.

pub mod comparison;
pub mod contract;
pub mod params;
pub mod pricing;
pub mod scenario;
