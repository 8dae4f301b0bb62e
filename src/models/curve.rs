// src/models/curve.rs

use std::fmt;

use crate::{
    analysis::{ValuePoint, valuation_series},
    domain::Params,
};

/// Store-issued identifier. Monotonic per store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurveKey(pub(crate) u64);

impl fmt::Display for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A saved calculation: its legend label, the params that produced it, and the series.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub params: Params,
    pub points: Vec<ValuePoint>,
}

impl Curve {
    pub fn from_params(params: Params) -> Self {
        Self {
            label: params.label(),
            points: valuation_series(&params),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalcKind;

    #[test]
    fn from_params_builds_label_and_series() {
        let curve = Curve::from_params(Params::clamped(CalcKind::FutureValue, 10, 5));
        assert_eq!(curve.label, "FV 5% 10y");
        assert_eq!(curve.points.len(), 11);
        assert_eq!(curve.points.last().map(|p| p.value), Some(162.89));
    }

    #[test]
    fn key_display() {
        assert_eq!(CurveKey(7).to_string(), "#7");
    }
}
