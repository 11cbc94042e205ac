use super::ui;
use crate::core::{Converter, Currency};
use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Applies a single edit and renders the resulting fields.
pub fn render(
    converter: &mut Converter,
    currency: Currency,
    amount: &str,
    format: OutputFormat,
) -> Result<String> {
    converter.on_field_edit(currency, amount)?;
    debug!(%currency, amount, ?format, "Rendering conversion");

    let rendered = match format {
        OutputFormat::Table => ui::render_form(converter),
        OutputFormat::Json => serde_json::to_string_pretty(converter.fields())?,
    };
    Ok(rendered)
}

pub fn run(
    converter: &mut Converter,
    currency: Currency,
    amount: &str,
    format: OutputFormat,
) -> Result<()> {
    println!("{}", render(converter, currency, amount, format)?);
    Ok(())
}
