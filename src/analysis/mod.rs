pub mod valuation;

pub use valuation::{ValuePoint, value_at, valuation_series};
