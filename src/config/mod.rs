//! Configuration module for the value curves application.

// Can all be private now because we have a public re-export.
mod compare;
mod debug;
mod persistence;
mod valuation;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use compare::{COMPARE, CompareConfig};
pub use debug::{DF, LOG_PERFORMANCE};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use valuation::{VALUATION, ValuationConfig};
