use std::fmt;

use {
    anyhow::{Result, ensure},
    serde::{Deserialize, Serialize},
};

use crate::{config::VALUATION, domain::CalcKind};

/// One (kind, horizon, rate) combination. Determines exactly one curve.
///
/// The rate is held in whole percent because that is what the slider produces;
/// `rate()` gives the decimal form used by the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Params {
    pub kind: CalcKind,
    pub years: u32,
    pub rate_pct: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            kind: CalcKind::default(),
            years: VALUATION.default_years,
            rate_pct: VALUATION.default_rate_pct,
        }
    }
}

impl Params {
    /// Checked constructor for values coming from outside the widgets (CLI args).
    pub fn new(kind: CalcKind, years: u32, rate_pct: u32) -> Result<Self> {
        ensure!(
            years <= VALUATION.max_years,
            "years must be between 0 and {} (got {})",
            VALUATION.max_years,
            years
        );
        ensure!(
            rate_pct <= VALUATION.max_rate_pct,
            "rate must be between 0% and {}% (got {}%)",
            VALUATION.max_rate_pct,
            rate_pct
        );
        Ok(Self {
            kind,
            years,
            rate_pct,
        })
    }

    /// Saturating constructor, for restored settings that may predate a bound change.
    pub fn clamped(kind: CalcKind, years: u32, rate_pct: u32) -> Self {
        Self {
            kind,
            years: years.min(VALUATION.max_years),
            rate_pct: rate_pct.min(VALUATION.max_rate_pct),
        }
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate_pct as f64 / 100.0
    }

    /// Horizon and kind together decide whether stored curves remain comparable.
    #[inline]
    pub fn same_axis(&self, other: &Params) -> bool {
        self.years == other.years && self.kind == other.kind
    }

    /// Legend label, e.g. "FV 5% 10y"
    pub fn label(&self) -> String {
        format!(
            "{} {}% {}y",
            self.kind.short_label(),
            self.rate_pct,
            self.years
        )
    }

    /// Table subheading, e.g. "Current FV at 5% for 10 year(s)"
    pub fn heading(&self) -> String {
        format!(
            "Current {} at {}% for {} year(s)",
            self.kind.short_label(),
            self.rate_pct,
            self.years
        )
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_slider_positions() {
        let p = Params::default();
        assert_eq!(p.kind, CalcKind::FutureValue);
        assert_eq!(p.years, 10);
        assert_eq!(p.rate_pct, 5);
    }

    #[test]
    fn new_accepts_bounds() {
        assert!(Params::new(CalcKind::PresentValue, 0, 0).is_ok());
        assert!(Params::new(CalcKind::PresentValue, 50, 20).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range() {
        let err = Params::new(CalcKind::FutureValue, 51, 5).unwrap_err();
        assert!(err.to_string().contains("years"));

        let err = Params::new(CalcKind::FutureValue, 10, 21).unwrap_err();
        assert!(err.to_string().contains("rate"));
    }

    #[test]
    fn clamped_saturates() {
        let p = Params::clamped(CalcKind::FutureValue, 80, 99);
        assert_eq!((p.years, p.rate_pct), (50, 20));
    }

    #[test]
    fn rate_is_decimal() {
        let p = Params::clamped(CalcKind::FutureValue, 10, 7);
        assert!((p.rate() - 0.07).abs() < 1e-12);
    }

    #[test]
    fn labels() {
        let p = Params::clamped(CalcKind::PresentValue, 10, 5);
        assert_eq!(p.label(), "PV 5% 10y");
        assert_eq!(p.heading(), "Current PV at 5% for 10 year(s)");
        assert_eq!(p.to_string(), "PV 5% 10y");
    }

    #[test]
    fn same_axis_ignores_rate() {
        let a = Params::clamped(CalcKind::FutureValue, 10, 5);
        let b = Params::clamped(CalcKind::FutureValue, 10, 12);
        let c = Params::clamped(CalcKind::PresentValue, 10, 5);
        let d = Params::clamped(CalcKind::FutureValue, 11, 5);
        assert!(a.same_axis(&b));
        assert!(!a.same_axis(&c));
        assert!(!a.same_axis(&d));
    }
}
