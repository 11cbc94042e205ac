use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxform::cli::convert::OutputFormat;
use fxform::core::Currency;
use fxform::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Rials per US dollar, overrides the configuration file
    #[arg(short, long, global = true)]
    rate: Option<f64>,

    /// Use the two currency (usd/irr) form
    #[arg(long, global = true)]
    pair: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert one amount and print every field
    Convert {
        /// Currency of the amount (usd, eur, gbp, aed, irr)
        #[arg(value_parser = parse_currency)]
        currency: Currency,

        /// Amount as typed; empty clears every field
        #[arg(allow_hyphen_values = true, default_value = "")]
        amount: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Open the interactive converter form
    Form,
}

fn parse_currency(s: &str) -> Result<Currency, String> {
    s.parse::<Currency>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let overrides = fxform::Overrides {
        rate: cli.rate,
        pair: cli.pair,
    };
    let config_path = cli.config_path.as_deref();

    let result = match cli.command {
        Some(Commands::Setup) => fxform::cli::setup::setup(),
        Some(Commands::Convert {
            currency,
            amount,
            format,
        }) => fxform::run_command(
            fxform::AppCommand::Convert {
                currency,
                amount,
                format,
            },
            config_path,
            overrides,
        ),
        Some(Commands::Form) => {
            fxform::run_command(fxform::AppCommand::Form, config_path, overrides)
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
