//! Interactive form session.
//!
//! Every input line is one edit event: it is applied to the converter in
//! full before the next line is read, then the form is re-rendered.

use super::ui;
use crate::core::{Converter, Currency};
use anyhow::{Context, Result};
use console::Term;
use std::io::BufRead;
use tracing::debug;

const HELP: &str = "Type `<code> <amount>` to edit a field (e.g. `usd 12.5`), \
`<code>` alone to empty it, `clear` to reset, `quit` to leave.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Edit(Currency, String),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Parses one line typed into the form.
pub fn parse_line(line: &str) -> Result<FormInput> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim_start()));

    match head.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Ok(FormInput::Quit),
        "clear" => Ok(FormInput::Clear),
        "help" | "?" | "" => Ok(FormInput::Help),
        code => {
            let currency = code.parse::<Currency>()?;
            Ok(FormInput::Edit(currency, rest.to_string()))
        }
    }
}

/// Applies one parsed input to the converter.
pub fn apply(converter: &mut Converter, input: FormInput) -> Result<Flow> {
    match input {
        FormInput::Edit(currency, text) => converter.on_field_edit(currency, &text)?,
        FormInput::Clear => converter.clear(),
        FormInput::Help => {}
        FormInput::Quit => return Ok(Flow::Stop),
    }
    Ok(Flow::Continue)
}

pub fn run(converter: &mut Converter) -> Result<()> {
    let stdin = std::io::stdin();
    run_with(converter, stdin.lock(), &Term::stdout())
}

/// Runs the session until `quit` or end of input.
pub fn run_with<R: BufRead>(converter: &mut Converter, input: R, term: &Term) -> Result<()> {
    term.write_line(&ui::render_form(converter))?;
    term.write_line(&ui::style_text(HELP, ui::StyleType::Subtle))?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        debug!(line = %line, "Form input");

        let flow = parse_line(&line).and_then(|input| {
            let show_help = input == FormInput::Help;
            let flow = apply(converter, input)?;
            if show_help {
                term.write_line(HELP)?;
            }
            Ok(flow)
        });

        match flow {
            Ok(Flow::Stop) => break,
            Ok(Flow::Continue) => {
                if term.is_term() {
                    term.clear_screen()?;
                }
                term.write_line(&ui::render_form(converter))?;
            }
            Err(e) => {
                term.write_line(&ui::style_text(&e.to_string(), ui::StyleType::Error))?;
            }
        }
    }
    Ok(())
}
