use crate::core::format::format_grouped;
use crate::core::{Converter, Currency, InputSpec, RateTable};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// A field's text, or its dimmed placeholder while empty.
pub fn field_cell(text: &str, spec: &InputSpec) -> Cell {
    if text.is_empty() {
        Cell::new(spec.placeholder)
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Left)
    } else {
        Cell::new(text)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right)
    }
}

fn constraints_cell(spec: &InputSpec) -> Cell {
    Cell::new(format!("min {} / step {}", spec.min, spec.step)).fg(Color::DarkGrey)
}

/// One row per field, in rate table order.
pub fn form_table(converter: &Converter) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Currency"),
        header_cell("Amount"),
        header_cell("Input"),
    ]);

    for (currency, text) in converter.fields().iter() {
        let spec = currency.input_spec();
        table.add_row(vec![
            Cell::new(currency.code()),
            Cell::new(spec.label),
            field_cell(text, &spec),
            constraints_cell(&spec),
        ]);
    }
    table
}

/// The static reference rate line, e.g. `Rate: 1 USD = 500,000 IRR`.
pub fn rate_line(rates: &RateTable) -> Option<String> {
    rates
        .rate(Currency::Irr)
        .map(|rate| format!("Rate: 1 USD = {} IRR", format_grouped(rate)))
}

/// Renders the whole form as printable text.
pub fn render_form(converter: &Converter) -> String {
    let mut out = format!(
        "{}\n{}",
        style_text("Currency Converter", StyleType::Title),
        form_table(converter)
    );
    if let Some(line) = rate_line(converter.rates()) {
        out.push('\n');
        out.push_str(&style_text(&line, StyleType::Subtle));
    }
    out
}
