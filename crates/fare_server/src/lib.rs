//! HTTP surface for the fare pricing engine.
//!
//! Request handling lives in [`handlers`] as plain functions of the request
//! body; [`routes`] wires them into an axum router. Pricing semantics stay in
//! `fare_core`.

pub mod config;
pub mod handlers;
pub mod routes;
