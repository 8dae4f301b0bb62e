//! Valuation bounds and defaults

/// Configuration for the FV/PV calculation and its input widgets
pub struct ValuationConfig {
    /// Fixed principal every curve starts from
    pub principal: f64,
    /// Upper bound of the "Number of years" slider (lower bound is 0)
    pub max_years: u32,
    /// Upper bound of the rate slider, in whole percent (lower bound is 0)
    pub max_rate_pct: u32,
    pub default_years: u32,
    pub default_rate_pct: u32,
    /// Values are rounded to this many decimals before storage/display
    pub decimals: u32,
}

pub const VALUATION: ValuationConfig = ValuationConfig {
    principal: 100.0,
    max_years: 50,
    max_rate_pct: 20,
    default_years: 10,
    default_rate_pct: 5,
    decimals: 2,
};
