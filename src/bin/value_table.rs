use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tabled::{Table, settings::Style};
use value_curves::{CalcKind, Params, valuation_series};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Print the FV/PV series for one parameter set.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = CalcKind::FutureValue)]
    kind: CalcKind,

    /// Number of years (0-50)
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Interest/discount rate in whole percent (0-20)
    #[arg(long, default_value_t = 5)]
    rate: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn render(args: &Args) -> Result<String> {
    let params = Params::new(args.kind, args.years, args.rate)?;
    let series = valuation_series(&params);
    log::info!("{}: {} points", params, series.len());

    match args.format {
        OutputFormat::Table => {
            let mut table = Table::new(&series);
            table.with(Style::rounded());
            Ok(format!("{}\n{}", params.heading(), table))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&series).context("Failed to serialize value series")
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    println!("{}", render(&args)?);
    Ok(())
}
