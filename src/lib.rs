#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for value_table.rs)
pub use analysis::{ValuePoint, valuation_series};
pub use app::App;
pub use domain::{AddMode, CalcKind, Params};
pub use engine::{Action, CompareState, RenderModel, dispatch, render_model};

// CLI argument parsing
use clap::Parser;

/// Starting values for the sliders. Anything left out comes from the saved session.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Calculation type to start with
    #[arg(long, value_enum)]
    pub kind: Option<CalcKind>,

    /// Number of years (0-50)
    #[arg(long)]
    pub years: Option<u32>,

    /// Interest/discount rate in whole percent (0-20)
    #[arg(long)]
    pub rate: Option<u32>,

    /// When curves are added to the comparison chart
    #[arg(long, value_enum)]
    pub add_mode: Option<AddMode>,
}

impl Cli {
    /// Overlay the given options on `base`, rejecting out-of-range values.
    pub fn initial_params(&self, base: Params) -> anyhow::Result<Params> {
        Params::new(
            self.kind.unwrap_or(base.kind),
            self.years.unwrap_or(base.years),
            self.rate.unwrap_or(base.rate_pct),
        )
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_parses_all_options() {
        let cli = Cli::parse_from([
            "value-curves",
            "--kind",
            "pv",
            "--years",
            "30",
            "--rate",
            "7",
            "--add-mode",
            "manual",
        ]);
        assert_eq!(cli.kind, Some(CalcKind::PresentValue));
        assert_eq!(cli.add_mode, Some(AddMode::Manual));
        let params = cli.initial_params(Params::default()).unwrap();
        assert_eq!(params, Params::clamped(CalcKind::PresentValue, 30, 7));
    }

    #[test]
    fn cli_without_options_keeps_base() {
        let cli = Cli::parse_from(["value-curves"]);
        let base = Params::clamped(CalcKind::PresentValue, 12, 3);
        assert_eq!(cli.initial_params(base).unwrap(), base);
    }

    #[test]
    fn cli_rejects_out_of_range_rate() {
        let cli = Cli::parse_from(["value-curves", "--rate", "25"]);
        assert!(cli.initial_params(Params::default()).is_err());
    }

    #[test]
    fn cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["value-curves", "--kind", "npv"]).is_err());
    }
}
