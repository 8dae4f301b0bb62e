//! Closed-form FV/PV over a whole horizon.

use serde::{Deserialize, Serialize};

use crate::{
    config::VALUATION,
    domain::{CalcKind, Params},
    utils::round_to,
};

/// One row of a value series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, tabled::Tabled)]
pub struct ValuePoint {
    #[tabled(rename = "Year")]
    pub year: u32,
    #[tabled(rename = "Value", display_with = "format_two_dp")]
    pub value: f64,
}

fn format_two_dp(value: &f64) -> String {
    format!("{:.2}", value)
}

impl ValuePoint {
    #[inline]
    pub fn as_plot_point(&self) -> [f64; 2] {
        [self.year as f64, self.value]
    }
}

/// Unrounded value of the principal after `year` periods.
/// FV = P * (1+r)^year, PV = P / (1+r)^year.
pub fn value_at(kind: CalcKind, rate: f64, year: u32) -> f64 {
    let growth = (1.0 + rate).powi(year as i32);
    match kind {
        CalcKind::FutureValue => VALUATION.principal * growth,
        CalcKind::PresentValue => VALUATION.principal / growth,
    }
}

/// Rounded series for years 0..=params.years (always params.years + 1 points).
pub fn valuation_series(params: &Params) -> Vec<ValuePoint> {
    let rate = params.rate();
    (0..=params.years)
        .map(|year| ValuePoint {
            year,
            value: round_to(value_at(params.kind, rate, year), VALUATION.decimals),
        })
        .collect()
}
