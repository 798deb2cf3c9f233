use serde::{Deserialize, Serialize};

/// How strongly a breakdown line moved the price, for display weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// One line of the itemized breakdown.
///
/// `value` is the amount this rule added to the running total when it was
/// applied. It is left unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdownItem {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    pub impact: Impact,
}

impl PriceBreakdownItem {
    pub fn flat(label: impl Into<String>, value: f64, impact: Impact) -> Self {
        Self {
            label: label.into(),
            value,
            multiplier: None,
            impact,
        }
    }

    pub fn surcharge(label: impl Into<String>, value: f64, multiplier: f64, impact: Impact) -> Self {
        Self {
            label: label.into(),
            value,
            multiplier: Some(multiplier),
            impact,
        }
    }
}

/// Output of [`super::compute_price`].
///
/// `base_fare` holds the vehicle base fare plus the distance cost, rounded to
/// two decimals. The name is kept for wire compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResult {
    pub total_price: f64,
    pub base_fare: f64,
    pub breakdown: Vec<PriceBreakdownItem>,
    pub surge_multiplier: f64,
    pub percentage_change: f64,
}

impl PriceResult {
    /// Breakdown lines past base fare and distance, i.e. the applied surcharges.
    pub fn surcharges(&self) -> &[PriceBreakdownItem] {
        self.breakdown.get(2..).unwrap_or(&[])
    }
}
