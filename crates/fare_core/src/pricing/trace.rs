//! Step-by-step view of a price calculation, including rules that did not fire.

use serde::{Deserialize, Serialize};

use super::result::PriceBreakdownItem;
use super::rules::{base_items, RuleKind, SURCHARGE_RULES};
use crate::params::SimulationParameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleStep {
    pub rule: RuleKind,
    pub active: bool,
    pub total_before: f64,
    pub surcharge: f64,
    pub total_after: f64,
    /// Breakdown lines this step emitted; empty when inactive.
    pub items: Vec<PriceBreakdownItem>,
}

/// Walk the same rule table as [`super::compute_price`] and record every step.
///
/// The first step is always base fare plus distance. Totals are unrounded.
pub fn trace_price(params: &SimulationParameters) -> Vec<RuleStep> {
    let fare = params.vehicle_type.fare();
    let base = base_items(params, &fare);
    let base_total: f64 = base.iter().map(|item| item.value).sum();

    let mut steps = Vec::with_capacity(SURCHARGE_RULES.len() + 1);
    steps.push(RuleStep {
        rule: RuleKind::BaseDistance,
        active: true,
        total_before: 0.0,
        surcharge: base_total,
        total_after: base_total,
        items: base.to_vec(),
    });

    let mut running_total = base_total;
    for (kind, rule) in SURCHARGE_RULES {
        let step = match rule(params, running_total) {
            Some(item) => RuleStep {
                rule: kind,
                active: true,
                total_before: running_total,
                surcharge: item.value,
                total_after: running_total + item.value,
                items: vec![item],
            },
            None => RuleStep {
                rule: kind,
                active: false,
                total_before: running_total,
                surcharge: 0.0,
                total_after: running_total,
                items: Vec::new(),
            },
        };
        running_total = step.total_after;
        steps.push(step);
    }

    steps
}
