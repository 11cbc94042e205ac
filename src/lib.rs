pub mod cli;
pub mod core;

use crate::cli::convert::OutputFormat;
use crate::core::config::AppConfig;
use crate::core::{Converter, Currency, Variant};
use anyhow::{Context, Result};
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        currency: Currency,
        amount: String,
        format: OutputFormat,
    },
    Form,
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub rate: Option<f64>,
    pub pair: bool,
}

/// Resolves the effective configuration: file (or defaults), then overrides.
pub fn resolve_config(config_path: Option<&str>, overrides: Overrides) -> Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    if let Some(rate) = overrides.rate {
        config.rate = rate;
    }
    if overrides.pair {
        config.variant = Variant::Pair;
    }
    config.validate()?;
    debug!("Resolved config: {config:#?}");
    Ok(config)
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    overrides: Overrides,
) -> Result<()> {
    info!("Currency converter starting...");

    let config = resolve_config(config_path, overrides)?;
    let mut converter = Converter::with_variant(config.variant, config.rate)
        .context("Failed to build converter")?;

    match command {
        AppCommand::Convert {
            currency,
            amount,
            format,
        } => cli::convert::run(&mut converter, currency, &amount, format),
        AppCommand::Form => cli::form::run(&mut converter),
    }
}
